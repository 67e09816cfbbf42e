use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use business::domain::errors::StorageError;
use business::domain::storage::key::StorageKey;
use business::domain::storage::repository::KeyValueStore;

/// Keeps each key in `<dir>/<key>.json`.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so a crash mid-write leaves the previous payload intact.
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(StorageError::write_failed)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::read_failed(err)),
        }
    }

    fn write(&self, key: StorageKey, payload: &str) -> Result<(), StorageError> {
        let target = self.path_for(key);
        let staging = self.dir.join(format!(".{}.json.tmp", key.as_str()));

        fs::write(&staging, payload).map_err(StorageError::write_failed)?;
        if let Err(err) = fs::rename(&staging, &target) {
            let _ = fs::remove_file(&staging);
            return Err(StorageError::write_failed(err));
        }

        tracing::debug!(key = key.as_str(), bytes = payload.len(), "Wrote storage entry");
        Ok(())
    }

    fn delete(&self, key: StorageKey) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::remove_failed(err)),
        }
    }
}
