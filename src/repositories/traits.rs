use crate::error::StorageResult;
use crate::models::Directory;

/// Store for the whole directory.
///
/// Provides abstraction over where and how the snapshot lives, enabling
/// different implementations (JSON file, in-memory for tests).
pub trait DirectoryStore {
    /// Load the saved directory, or an empty one when nothing was saved yet.
    fn load(&self) -> StorageResult<Directory>;

    /// Persist the full directory, replacing the previous snapshot.
    fn save(&self, directory: &Directory) -> StorageResult<()>;
}
