use async_trait::async_trait;
use log::{ debug, warn };
use std::error::Error as StdError;
use std::path::{ Path, PathBuf };
use tokio::fs;

use super::{ StorageAdapter, StorageError };
use crate::models::chat::ConversationRecord;

/// Stores the history as one JSON document at `<dir>/<key>.json`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StorageAdapter for FileStore {
    async fn read_store(&self) -> Vec<ConversationRecord> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                debug!("History store not readable at {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ConversationRecord>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Error parsing history store {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    async fn write_store(
        &self,
        records: &[ConversationRecord]
    ) -> Result<(), Box<dyn StdError + Send + Sync>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(StorageError::Io)?;
            }
        }

        let json = serde_json::to_string(records).map_err(StorageError::Serialization)?;
        fs::write(&self.path, json).await.map_err(StorageError::Io)?;
        Ok(())
    }

    async fn remove_store(&self) -> Result<(), Box<dyn StdError + Send + Sync>> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Box::new(StorageError::Io(e))),
        }
    }
}
