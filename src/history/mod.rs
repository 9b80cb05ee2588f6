use chrono::{ Local, Utc };
use log::{ debug, info };
use std::error::Error as StdError;
use std::sync::Arc;

use crate::models::chat::{ ConversationRecord, HistoryEntry };
use crate::session::ConversationSession;
use crate::storage::StorageAdapter;
use crate::ui::{ HistorySidebar, TranscriptPanel, HISTORY_CLEARED_MESSAGE, WELCOME_MESSAGE };

/// Sidebar titles keep at most this many characters of the first message.
const TITLE_MAX_CHARS: usize = 30;

/// Maintains the persisted list of past conversations and the sidebar that
/// indexes them.
pub struct HistoryManager {
    storage: Arc<dyn StorageAdapter>,
}

impl HistoryManager {
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self { storage }
    }

    /// Rebuilds the sidebar from the persisted store, newest first.
    pub async fn load_all(&self, sidebar: &mut dyn HistorySidebar) {
        let records = self.storage.read_store().await;
        let entries: Vec<HistoryEntry> = records
            .iter()
            .enumerate()
            .map(|(index, record)| HistoryEntry {
                index,
                title: record_title(record),
            })
            .collect();
        sidebar.rebuild(&entries);
    }

    /// Captures the current session as a brand-new record, but only on the
    /// first message of a conversation that was never saved. Later turns of
    /// the same conversation never update the record.
    pub async fn persist_if_new(
        &self,
        session: &mut ConversationSession,
        sidebar: &mut dyn HistorySidebar
    ) -> Result<(), Box<dyn StdError + Send + Sync>> {
        if session.len() != 1 || session.is_saved() {
            return Ok(());
        }

        let record = ConversationRecord {
            id: Utc::now().timestamp_millis(),
            date: Local::now().format("%d/%m/%Y, %H:%M:%S").to_string(),
            messages: session.messages().to_vec(),
        };

        let mut records = self.storage.read_store().await;
        records.insert(0, record);
        self.storage.write_store(&records).await?;
        session.mark_saved();
        info!("Saved new conversation {} to history", session.id());

        self.load_all(sidebar).await;
        Ok(())
    }

    /// Replays the record at `index` into the panel and session. An index
    /// with no record is a no-op. The session receives its own copy of the
    /// message sequence; the stored record never sees later appends.
    pub async fn load(
        &self,
        index: usize,
        session: &mut ConversationSession,
        panel: &mut dyn TranscriptPanel
    ) {
        let records = self.storage.read_store().await;
        let record = match records.get(index) {
            Some(record) => record,
            None => {
                debug!("No saved conversation at index {}", index);
                return;
            }
        };

        panel.reset(WELCOME_MESSAGE);
        for message in &record.messages {
            panel.append(message.role, &message.content);
        }
        session.replace(record.messages.clone());
    }

    /// Deletes the entire history store, empties the sidebar, and resets the
    /// panel and session. Callers confirm with the user before invoking;
    /// there is no undo.
    pub async fn clear_all(
        &self,
        session: &mut ConversationSession,
        sidebar: &mut dyn HistorySidebar,
        panel: &mut dyn TranscriptPanel
    ) -> Result<(), Box<dyn StdError + Send + Sync>> {
        self.storage.remove_store().await?;
        sidebar.clear();
        panel.reset(HISTORY_CLEARED_MESSAGE);
        session.reset();
        info!("Conversation history cleared");
        Ok(())
    }
}

/// Derives a sidebar title from a record's first message, truncated to
/// [`TITLE_MAX_CHARS`] characters with an ellipsis marker. A record without
/// messages gets an empty title.
pub fn record_title(record: &ConversationRecord) -> String {
    let content = record.messages.first().map(|m| m.content.as_str()).unwrap_or("");
    let mut title: String = content.chars().take(TITLE_MAX_CHARS).collect();
    if content.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }
    title
}
