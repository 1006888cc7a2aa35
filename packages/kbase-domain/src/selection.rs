use serde::{Deserialize, Serialize};

use crate::SearchHit;

/// Outcome of reading the user's choice on the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Selection {
	/// Leave the results without editing anything.
	Return,
	/// A 1-based `index` into the displayed hits and the key it resolved to.
	Chosen { index: usize, key: String },
	/// A number outside `1..=len`.
	InvalidSelection { index: i64, len: usize },
	/// Neither the return keyword nor a number.
	InvalidInput { raw: String },
}

pub fn parse_selection(raw: &str, return_keyword: &str, hits: &[SearchHit]) -> Selection {
	let trimmed = raw.trim();

	if trimmed == return_keyword {
		return Selection::Return;
	}

	let Ok(index) = trimmed.parse::<i64>() else {
		return Selection::InvalidInput { raw: raw.to_string() };
	};

	match usize::try_from(index) {
		Ok(position) if (1..=hits.len()).contains(&position) =>
			Selection::Chosen { index: position, key: hits[position - 1].key.clone() },
		_ => Selection::InvalidSelection { index, len: hits.len() },
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn hits() -> Vec<SearchHit> {
		vec![
			SearchHit { key: "金属".to_string(), weight: 2, score: 2 },
			SearchHit { key: "金".to_string(), weight: 7, score: 1 },
		]
	}

	#[test]
	fn resolves_one_based_index() {
		assert_eq!(
			parse_selection(" 2 ", "q", &hits()),
			Selection::Chosen { index: 2, key: "金".to_string() }
		);
	}

	#[test]
	fn zero_and_negative_are_out_of_range() {
		assert_eq!(
			parse_selection("0", "q", &hits()),
			Selection::InvalidSelection { index: 0, len: 2 }
		);
		assert_eq!(
			parse_selection("-1", "q", &hits()),
			Selection::InvalidSelection { index: -1, len: 2 }
		);
	}

	#[test]
	fn return_keyword_wins_over_parsing() {
		assert_eq!(parse_selection("q\n", "q", &hits()), Selection::Return);
		assert_eq!(
			parse_selection("Q", "q", &hits()),
			Selection::InvalidInput { raw: "Q".to_string() }
		);
	}

	#[test]
	fn serializes_with_outcome_tag() {
		let value = serde_json::to_value(Selection::InvalidSelection { index: 3, len: 2 })
			.expect("serialize failed");

		assert_eq!(value["outcome"], "invalid_selection");
		assert_eq!(value["index"], 3);
	}
}
