//! Keyed JSON document store.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use taskbalance_core::errors::{Result, StorageError};

/// A directory of keyed JSON documents.
///
/// The contract is deliberately small: `load` returns the decoded document
/// or `None` when the key has never been written, and `save` replaces the
/// document atomically (write to a temporary file, then rename) so readers
/// never observe a partial write.
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            StorageError::WriteFailed(format!("failed to create {}: {}", root.display(), e))
        })?;
        Ok(JsonStore { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(
                    StorageError::ReadFailed(format!("{}: {}", path.display(), e)).into(),
                )
            }
        };
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| StorageError::Serialization(format!("{}: {}", path.display(), e)))?;
        Ok(Some(value))
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let json = serde_json::to_vec_pretty(value)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &json)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
        value: i64,
    }

    #[test]
    fn load_of_an_unwritten_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        let loaded: Option<Vec<Doc>> = store.load("missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        let docs = vec![
            Doc {
                name: "a".to_string(),
                value: 1,
            },
            Doc {
                name: "b".to_string(),
                value: 2,
            },
        ];
        store.save("docs", &docs).unwrap();

        let loaded: Option<Vec<Doc>> = store.load("docs").unwrap();
        assert_eq!(loaded, Some(docs));
    }

    #[test]
    fn save_replaces_the_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        store
            .save(
                "doc",
                &Doc {
                    name: "old".to_string(),
                    value: 1,
                },
            )
            .unwrap();
        store
            .save(
                "doc",
                &Doc {
                    name: "new".to_string(),
                    value: 2,
                },
            )
            .unwrap();

        let loaded: Option<Doc> = store.load("doc").unwrap();
        assert_eq!(loaded.unwrap().name, "new");
    }

    #[test]
    fn corrupted_documents_surface_as_serialization_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        std::fs::write(dir.path().join("doc.json"), b"not json").unwrap();
        let result: Result<Option<Doc>> = store.load("doc");
        assert!(result.is_err());
    }
}
