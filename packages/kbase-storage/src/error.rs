use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("I/O failure on {path:?}.")]
	Io { path: PathBuf, source: std::io::Error },
	#[error("Malformed JSON in {path:?}.")]
	Json { path: PathBuf, source: serde_json::Error },
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
}
