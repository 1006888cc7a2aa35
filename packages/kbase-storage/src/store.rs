use std::collections::BTreeMap;

use crate::{Error, JsonFile, Result};

/// The weight and description mappings plus the two files that back them.
///
/// Both mappings share one key space but are read and written independently, so a key may carry a
/// weight without a description. `persist` always writes complete snapshots of both.
#[derive(Debug)]
pub struct Store {
	weights: BTreeMap<String, i64>,
	descriptions: BTreeMap<String, String>,
	weights_file: JsonFile,
	descriptions_file: JsonFile,
}
impl Store {
	pub fn open(cfg: &kbase_config::Storage) -> Result<Self> {
		Self::from_files(JsonFile::new(&cfg.weights_path), JsonFile::new(&cfg.descriptions_path))
	}

	pub fn from_files(weights_file: JsonFile, descriptions_file: JsonFile) -> Result<Self> {
		let mut store = Self {
			weights: BTreeMap::new(),
			descriptions: BTreeMap::new(),
			weights_file,
			descriptions_file,
		};

		store.reload()?;

		Ok(store)
	}

	/// Replaces the in-memory mappings with what is on disk. Missing files read as empty.
	pub fn reload(&mut self) -> Result<()> {
		self.weights = self.weights_file.load()?.unwrap_or_default();
		self.descriptions = self.descriptions_file.load()?.unwrap_or_default();

		tracing::debug!(
			weights = self.weights.len(),
			descriptions = self.descriptions.len(),
			path = %self.weights_file.path().display(),
			"Store loaded."
		);

		Ok(())
	}

	pub fn persist(&self) -> Result<()> {
		self.weights_file.save(&self.weights)?;
		self.descriptions_file.save(&self.descriptions)?;

		tracing::info!(
			weights = self.weights.len(),
			descriptions = self.descriptions.len(),
			"Store persisted."
		);

		Ok(())
	}

	pub fn weights(&self) -> &BTreeMap<String, i64> {
		&self.weights
	}

	pub fn descriptions(&self) -> &BTreeMap<String, String> {
		&self.descriptions
	}

	pub fn weight(&self, key: &str) -> Option<i64> {
		self.weights.get(key).copied()
	}

	pub fn description(&self, key: &str) -> Option<&str> {
		self.descriptions.get(key).map(String::as_str)
	}

	/// Insert-or-replace both the weight and the description of `key`.
	pub fn upsert(&mut self, key: &str, weight: i64, description: &str) -> Result<()> {
		self.set_weight(key, weight)?;
		self.set_description(key, description)
	}

	pub fn set_weight(&mut self, key: &str, weight: i64) -> Result<()> {
		validate_key(key)?;
		self.weights.insert(key.to_string(), weight);

		Ok(())
	}

	pub fn set_description(&mut self, key: &str, description: &str) -> Result<()> {
		validate_key(key)?;
		self.descriptions.insert(key.to_string(), description.to_string());

		Ok(())
	}

	/// Number of searchable keys.
	pub fn len(&self) -> usize {
		self.weights.len()
	}

	pub fn is_empty(&self) -> bool {
		self.weights.is_empty()
	}
}

fn validate_key(key: &str) -> Result<()> {
	if key.is_empty() {
		return Err(Error::InvalidArgument("Entry key must be non-empty.".to_string()));
	}

	Ok(())
}
