//! # Cart Storage Backends
//!
//! Key-value persistence for serialized cart documents. The store keeps the
//! whole cart as ONE JSON document under a namespaced key; there is no
//! per-line storage and no query surface, so the backend contract stays
//! minimal: load, save, remove.
//!
//! `FileStorage` is the production backend: one file per key under the
//! platform data directory. Tests swap in an in-memory backend.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::debug;

// =============================================================================
// Error Type
// =============================================================================

/// Errors from a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no data directory available on this platform")]
    NoDataDir,
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Storage Trait
// =============================================================================

/// A key-value document store for serialized carts.
///
/// Implementations must treat the value as opaque: interpretation (and
/// rejection of incompatible payloads) happens in the store layer, not here.
pub trait CartStorage {
    /// Loads the raw document for `key`, or `None` if absent.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes the raw document for `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes the document for `key`. Absent keys are not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// File Storage
// =============================================================================

/// One JSON file per key under a base directory.
///
/// Keys map to file names directly (`arcadia.cart.v0` → `arcadia.cart.v0.json`),
/// so keys must be file-name safe. All keys this crate uses are.
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at the platform data directory
    /// (e.g. `~/.local/share/arcadia-storefront` on Linux).
    pub fn new() -> StoreResult<Self> {
        let dirs = ProjectDirs::from("com", "arcadia", "arcadia-storefront")
            .ok_or(StoreError::NoDataDir)?;
        Self::with_dir(dirs.data_dir().to_path_buf())
    }

    /// Opens storage rooted at an explicit directory. Used in tests.
    pub fn with_dir(base_dir: PathBuf) -> StoreResult<Self> {
        fs::create_dir_all(&base_dir)?;
        debug!(dir = %base_dir.display(), "cart storage opened");
        Ok(FileStorage { base_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl CartStorage for FileStorage {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        // Write-then-rename so a crash mid-write never truncates the
        // previous document.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::with_dir(dir.path().to_path_buf()).unwrap();

        assert!(storage.load("k").unwrap().is_none());

        storage.save("k", r#"{"lines":[]}"#).unwrap();
        assert_eq!(storage.load("k").unwrap().unwrap(), r#"{"lines":[]}"#);

        storage.save("k", r#"{"lines":[1]}"#).unwrap();
        assert_eq!(storage.load("k").unwrap().unwrap(), r#"{"lines":[1]}"#);

        storage.remove("k").unwrap();
        assert!(storage.load("k").unwrap().is_none());
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::with_dir(dir.path().to_path_buf()).unwrap();
        assert!(storage.remove("never-written").is_ok());
    }
}
