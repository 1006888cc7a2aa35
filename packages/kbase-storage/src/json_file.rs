use std::{
	ffi::OsString,
	fs, io,
	path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result};

/// A single JSON document on disk, always rewritten as a whole.
#[derive(Debug, Clone)]
pub struct JsonFile {
	path: PathBuf,
}
impl JsonFile {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Returns `None` when the file does not exist yet.
	pub fn load<T>(&self) -> Result<Option<T>>
	where
		T: DeserializeOwned,
	{
		let raw = match fs::read_to_string(&self.path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(Error::Io { path: self.path.clone(), source: err }),
		};
		let value = serde_json::from_str(&raw)
			.map_err(|err| Error::Json { path: self.path.clone(), source: err })?;

		Ok(Some(value))
	}

	/// Writes `value` to a sibling temp file and renames it over the target.
	pub fn save<T>(&self, value: &T) -> Result<()>
	where
		T: Serialize,
	{
		let mut payload = serde_json::to_string_pretty(value)
			.map_err(|err| Error::Json { path: self.path.clone(), source: err })?;

		payload.push('\n');

		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent)
				.map_err(|err| Error::Io { path: parent.to_path_buf(), source: err })?;
		}

		let staging = self.staging_path();

		fs::write(&staging, payload)
			.map_err(|err| Error::Io { path: staging.clone(), source: err })?;
		fs::rename(&staging, &self.path)
			.map_err(|err| Error::Io { path: self.path.clone(), source: err })?;

		Ok(())
	}

	fn staging_path(&self) -> PathBuf {
		let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();

		name.push(".tmp");

		self.path.with_file_name(name)
	}
}
