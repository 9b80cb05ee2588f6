use serde::{ Serialize, Deserialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// A persisted snapshot of one conversation. `id` is the creation timestamp
/// in milliseconds; `date` is the localized display string shown alongside
/// history entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub id: i64,
    pub date: String,
    pub messages: Vec<ChatMessage>,
}

/// One clickable row of the history sidebar, tagged with the index of its
/// record in the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub index: usize,
    pub title: String,
}
