mod json_file_store;
mod traits;

pub use json_file_store::{JsonFileStore, SNAPSHOT_VERSION};
pub use traits::DirectoryStore;
