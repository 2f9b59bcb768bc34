use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::infrastructure::store::{Collection, Store};

/// File-backed store: one `<collection>.json` document per collection under
/// a data directory. The durable stand-in for browser local storage.
#[derive(Debug)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> AppResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        fs::create_dir_all(&data_dir).map_err(|e| {
            AppError::StorageError(format!(
                "Failed to create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        info!("File store initialized at: {}", data_dir.display());
        Ok(Self { data_dir })
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection.key()))
    }
}

impl Store for FileStore {
    fn load(&self, collection: Collection) -> Option<String> {
        // A missing or unreadable file is an absent key, not an error.
        fs::read_to_string(self.collection_path(collection)).ok()
    }

    fn save(&self, collection: Collection, payload: &str) -> AppResult<()> {
        let path = self.collection_path(collection);
        fs::write(&path, payload).map_err(|e| {
            AppError::StorageError(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::new(dir.path()).unwrap();
        store.save(Collection::Events, "[{\"x\":1}]").unwrap();

        let reopened = FileStore::new(dir.path()).unwrap();
        assert_eq!(
            reopened.load(Collection::Events).as_deref(),
            Some("[{\"x\":1}]")
        );
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        assert!(store.load(Collection::Reviews).is_none());
    }
}
