use uuid::Uuid;

use crate::models::chat::ChatMessage;

/// The conversation currently on screen.
#[derive(Debug)]
pub struct ConversationSession {
    id: Uuid,
    messages: Vec<ChatMessage>,
    saved: bool,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            saved: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Swaps in a full message sequence when a saved conversation is loaded.
    /// A loaded conversation already has its record in the store, so the
    /// session counts as saved.
    pub fn replace(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
        self.saved = true;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether this session has already produced a history record.
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn mark_saved(&mut self) {
        self.saved = true;
    }

    /// Starts over with a fresh identity and an empty transcript.
    pub fn reset(&mut self) {
        self.id = Uuid::new_v4();
        self.messages.clear();
        self.saved = false;
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::Role;

    fn message(role: Role, content: &str) -> ChatMessage {
        ChatMessage {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn append_keeps_order() {
        let mut session = ConversationSession::new();
        session.append(message(Role::User, "primeira"));
        session.append(message(Role::System, "segunda"));

        assert_eq!(session.len(), 2);
        assert_eq!(session.messages()[0].content, "primeira");
        assert_eq!(session.messages()[1].content, "segunda");
    }

    #[test]
    fn replace_marks_session_saved() {
        let mut session = ConversationSession::new();
        assert!(!session.is_saved());

        session.replace(vec![message(Role::User, "antiga")]);

        assert!(session.is_saved());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn reset_yields_fresh_unsaved_session() {
        let mut session = ConversationSession::new();
        let old_id = session.id();
        session.append(message(Role::User, "oi"));
        session.mark_saved();

        session.reset();

        assert!(session.is_empty());
        assert!(!session.is_saved());
        assert_ne!(session.id(), old_id);
    }
}
