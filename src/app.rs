use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use crate::history::HistoryManager;
use crate::models::chat::{ ChatMessage, Role };
use crate::responder::Responder;
use crate::session::ConversationSession;
use crate::storage::StorageAdapter;
use crate::ui::{ HistorySidebar, TranscriptPanel, WELCOME_MESSAGE };

/// Wires the responder, the history store, the owned conversation session,
/// and the UI handles into the send/load/clear flows.
pub struct ChatApp<P: TranscriptPanel, S: HistorySidebar> {
    responder: Arc<dyn Responder>,
    history: HistoryManager,
    session: ConversationSession,
    panel: P,
    sidebar: S,
    reply_delay: Duration,
}

impl<P: TranscriptPanel, S: HistorySidebar> ChatApp<P, S> {
    pub fn new(
        responder: Arc<dyn Responder>,
        storage: Arc<dyn StorageAdapter>,
        panel: P,
        sidebar: S,
        reply_delay: Duration
    ) -> Self {
        Self {
            responder,
            history: HistoryManager::new(storage),
            session: ConversationSession::new(),
            panel,
            sidebar,
            reply_delay,
        }
    }

    /// Shows the welcome block and populates the sidebar from the store.
    pub async fn start(&mut self) {
        self.panel.reset(WELCOME_MESSAGE);
        self.history.load_all(&mut self.sidebar).await;
    }

    /// Runs one full send cycle: renders the user's message, captures a new
    /// conversation on its first message, then appends the reply after the
    /// fixed delay. Empty or whitespace-only input is a silent no-op.
    pub async fn send_message(
        &mut self,
        input: &str
    ) -> Result<Option<String>, Box<dyn StdError + Send + Sync>> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(None);
        }

        self.session.append(ChatMessage {
            role: Role::User,
            content: text.to_string(),
        });
        self.panel.append(Role::User, text);

        self.history.persist_if_new(&mut self.session, &mut self.sidebar).await?;

        tokio::time::sleep(self.reply_delay).await;
        let reply = self.responder.reply(text).await?.response;

        self.session.append(ChatMessage {
            role: Role::System,
            content: reply.clone(),
        });
        self.panel.append(Role::System, &reply);

        Ok(Some(reply))
    }

    pub async fn load_conversation(&mut self, index: usize) {
        self.history.load(index, &mut self.session, &mut self.panel).await;
    }

    pub async fn clear_history(&mut self) -> Result<(), Box<dyn StdError + Send + Sync>> {
        self.history.clear_all(&mut self.session, &mut self.sidebar, &mut self.panel).await
    }

    pub async fn refresh_sidebar(&mut self) {
        self.history.load_all(&mut self.sidebar).await;
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn sidebar(&self) -> &S {
        &self.sidebar
    }
}
