pub mod json_file;
pub mod store;

mod error;

pub use error::Error;
pub use json_file::JsonFile;
pub use store::Store;

pub type Result<T, E = Error> = std::result::Result<T, E>;
