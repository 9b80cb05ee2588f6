pub mod file;
pub mod memory;

use async_trait::async_trait;
use log::info;
use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

use self::file::FileStore;
use self::memory::MemoryStore;
use crate::cli::Args;
use crate::models::chat::ConversationRecord;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Single-key persistence for the history store: the whole record list is
/// serialized and written as one unit, newest record first.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Reads the full store. An absent key or a value that fails to parse
    /// reads as an empty list; callers never see a failure here.
    async fn read_store(&self) -> Vec<ConversationRecord>;

    /// Serializes `records` and fully overwrites the stored value.
    async fn write_store(
        &self,
        records: &[ConversationRecord]
    ) -> Result<(), Box<dyn StdError + Send + Sync>>;

    /// Deletes the stored value. Removing an absent key is not an error.
    async fn remove_store(&self) -> Result<(), Box<dyn StdError + Send + Sync>>;
}

pub fn create_storage(
    args: &Args
) -> Result<Arc<dyn StorageAdapter>, Box<dyn StdError + Send + Sync>> {
    match args.storage_type.to_lowercase().as_str() {
        "file" => {
            let store = FileStore::new(&args.storage_dir, &args.storage_key);
            Ok(Arc::new(store))
        }
        "memory" => Ok(Arc::new(MemoryStore::new())),
        _ =>
            Err(
                Box::new(
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("Unsupported storage type: {}", args.storage_type)
                    )
                )
            ),
    }
}

pub fn initialize_storage(
    args: &Args
) -> Result<Arc<dyn StorageAdapter>, Box<dyn StdError + Send + Sync>> {
    info!(
        "Conversation history will be stored in: {} under key '{}'",
        args.storage_type,
        args.storage_key
    );
    create_storage(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn factory_accepts_file_and_memory() {
        let args = Args::parse_from(["resin-chat", "--storage-type", "file"]);
        assert!(create_storage(&args).is_ok());

        let args = Args::parse_from(["resin-chat", "--storage-type", "memory"]);
        assert!(create_storage(&args).is_ok());
    }

    #[test]
    fn factory_rejects_unknown_storage_type() {
        let args = Args::parse_from(["resin-chat", "--storage-type", "tape"]);
        let err = match create_storage(&args) {
            Err(e) => e,
            Ok(_) => panic!("expected an error"),
        };
        assert!(err.to_string().contains("tape"));
    }
}
