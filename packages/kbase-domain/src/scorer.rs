/// Counts the characters of `query`, repeats included, that occur anywhere in `key`.
///
/// Membership is tested by raw `char` identity: no case folding and no Unicode normalization.
/// A character present once in `key` is counted once for every time it appears in `query`.
/// Saturates at `u32::MAX`.
pub fn score(query: &str, key: &str) -> u32 {
	saturate(query.chars().filter(|ch| key.contains(*ch)).count())
}

fn saturate(count: usize) -> u32 {
	u32::try_from(count).unwrap_or(u32::MAX)
}
