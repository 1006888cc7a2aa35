pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
	#[error("Input error: {message}")]
	Input { message: String },
}
impl From<kbase_storage::Error> for Error {
	fn from(err: kbase_storage::Error) -> Self {
		match err {
			kbase_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			other => {
				let message = match std::error::Error::source(&other) {
					Some(source) => format!("{other} {source}"),
					None => other.to_string(),
				};

				Self::Storage { message }
			},
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Input { message: err.to_string() }
	}
}
