use serde::{Deserialize, Serialize};

use crate::{Error, KbService, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInput {
	pub key: String,
	pub weight: i64,
	pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
	pub written: usize,
}

impl KbService {
	/// Insert-or-replace every entry, then persist both mappings once.
	///
	/// The batch is checked before anything is touched, so a rejected batch leaves the store as it
	/// was. Later entries win over earlier ones with the same key.
	pub fn apply_batch(&mut self, entries: Vec<EntryInput>) -> Result<BatchReport> {
		if let Some(position) = entries.iter().position(|entry| entry.key.is_empty()) {
			return Err(Error::InvalidRequest {
				message: format!("Entry {} has an empty key.", position + 1),
			});
		}

		for entry in &entries {
			self.store.upsert(&entry.key, entry.weight, &entry.description)?;
		}

		self.store.persist()?;

		tracing::info!(written = entries.len(), "Editor batch applied.");

		Ok(BatchReport { written: entries.len() })
	}
}
