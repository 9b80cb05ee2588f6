use async_trait::async_trait;
use log::warn;
use std::error::Error as StdError;
use tokio::sync::Mutex;

use super::StorageAdapter;
use crate::models::chat::ConversationRecord;

/// In-process store with the same single-entry contract as [`super::file::FileStore`].
/// Nothing survives the process; useful for tests and throwaway sessions.
pub struct MemoryStore {
    entry: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entry: Mutex::new(None),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageAdapter for MemoryStore {
    async fn read_store(&self) -> Vec<ConversationRecord> {
        let guard = self.entry.lock().await;
        let raw = match guard.as_ref() {
            Some(raw) => raw,
            None => {
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ConversationRecord>>(raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Error parsing in-memory history store: {}", e);
                Vec::new()
            }
        }
    }

    async fn write_store(
        &self,
        records: &[ConversationRecord]
    ) -> Result<(), Box<dyn StdError + Send + Sync>> {
        let json = serde_json::to_string(records)?;
        *self.entry.lock().await = Some(json);
        Ok(())
    }

    async fn remove_store(&self) -> Result<(), Box<dyn StdError + Send + Sync>> {
        *self.entry.lock().await = None;
        Ok(())
    }
}
