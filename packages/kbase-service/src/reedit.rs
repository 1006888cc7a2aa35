use crate::{Error, KbService, Result};

impl KbService {
	/// Overwrites the weight and description of an existing key and persists both mappings.
	///
	/// Keys without a stored description are fine; only the weight must exist.
	pub fn re_edit(&mut self, key: &str, weight: i64, description: &str) -> Result<()> {
		if self.store.weight(key).is_none() {
			return Err(Error::NotFound { message: format!("No entry for key {key:?}.") });
		}

		self.store.upsert(key, weight, description)?;
		self.store.persist()?;

		tracing::info!(key, weight, "Entry re-edited.");

		Ok(())
	}
}
