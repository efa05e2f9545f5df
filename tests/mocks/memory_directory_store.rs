use contact_directory::error::{StorageError, StorageResult};
use contact_directory::models::Directory;
use contact_directory::repositories::DirectoryStore;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;

/// In-memory `DirectoryStore` that tracks method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MemoryDirectoryStore {
    saved: RefCell<Option<Directory>>,
    call_counts: RefCell<HashMap<String, usize>>,
    fail_saves: Cell<bool>,
}

#[allow(dead_code)]
impl MemoryDirectoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `directory`.
    pub fn with_directory(directory: Directory) -> Self {
        let store = Self::new();
        *store.saved.borrow_mut() = Some(directory);
        store
    }

    /// Make every following `save` fail with an I/O error.
    pub fn fail_saves(&self) {
        self.fail_saves.set(true);
    }

    /// The last directory handed to `save`.
    pub fn saved(&self) -> Option<Directory> {
        self.saved.borrow().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl DirectoryStore for MemoryDirectoryStore {
    fn load(&self) -> StorageResult<Directory> {
        self.track_call("load");
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        self.track_call("save");
        if self.fail_saves.get() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        *self.saved.borrow_mut() = Some(directory.clone());
        Ok(())
    }
}
