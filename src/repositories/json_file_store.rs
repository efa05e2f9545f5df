use crate::error::{StorageError, StorageResult};
use crate::models::Directory;
use crate::repositories::traits::DirectoryStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Snapshot format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    contacts: &'a Directory,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    #[serde(default)]
    contacts: Directory,
}

/// Directory store backed by a pretty-printed JSON file.
///
/// The file holds `{"version": 1, "contacts": [...]}`. Saving writes a
/// sibling temporary file first and renames it over the target, so a crash
/// mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DirectoryStore for JsonFileStore {
    fn load(&self) -> StorageResult<Directory> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No snapshot at {}, starting empty", self.path.display());
                return Ok(Directory::new());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot = serde_json::from_str(&contents)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(snapshot.version));
        }

        info!(
            "Loaded {} contacts from {}",
            snapshot.contacts.len(),
            self.path.display()
        );
        Ok(snapshot.contacts)
    }

    fn save(&self, directory: &Directory) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            contacts: directory,
        };
        let json = serde_json::to_string_pretty(&snapshot)?;

        let temp = self.temp_path();
        fs::write(&temp, json)?;
        debug!("Wrote temporary snapshot {}", temp.display());
        fs::rename(&temp, &self.path)?;

        info!(
            "Saved {} contacts to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactRecord;

    #[test]
    fn test_temp_path_is_sibling() {
        let store = JsonFileStore::new("/data/addressbook.json");
        assert_eq!(store.temp_path(), PathBuf::from("/data/addressbook.json.tmp"));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("book.json"));

        let mut record = ContactRecord::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.set_birthday("12.06.1990").unwrap();
        let directory: Directory = vec![record].into_iter().collect();

        store.save(&directory).unwrap();
        assert!(!store.temp_path().exists());
        assert_eq!(store.load().unwrap(), directory);
    }

    #[test]
    fn test_snapshot_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("book.json"));
        store.save(&Directory::new()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["contacts"], serde_json::json!([]));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"{"version": 2, "contacts": []}"#).unwrap();

        let result = JsonFileStore::new(&path).load();
        assert!(matches!(result, Err(StorageError::UnsupportedVersion(2))));
    }

    #[test]
    fn test_invalid_phone_in_snapshot_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(
            &path,
            r#"{"version": 1, "contacts": [{"name": "John", "phones": ["12"]}]}"#,
        )
        .unwrap();

        let result = JsonFileStore::new(&path).load();
        assert!(matches!(result, Err(StorageError::Json(_))));
    }
}
