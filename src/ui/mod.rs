pub mod terminal;

use crate::models::chat::{ HistoryEntry, Role };

pub const WELCOME_MESSAGE: &str =
    "Bem-vindo(a) ao Sr. Luiz Dominus™ IA.! Como posso ajudar você hoje?";

pub const HISTORY_CLEARED_MESSAGE: &str = "Histórico limpo. Bem-vindo(a) novamente!";

/// Display surface for the running transcript. Message content is untrusted
/// and must be rendered escaped; only the fixed welcome text passed to
/// `reset` is rendered as-is.
pub trait TranscriptPanel {
    /// Appends one role-tagged block after the newest entry and keeps the
    /// view positioned on it.
    fn append(&mut self, role: Role, text: &str);

    /// Discards every displayed block and shows a single welcome block.
    fn reset(&mut self, welcome: &str);

    fn block_count(&self) -> usize;
}

/// Index of saved conversations, one entry per record in store order.
pub trait HistorySidebar {
    /// Replaces all entries with the given list; no incremental diffing.
    fn rebuild(&mut self, entries: &[HistoryEntry]);

    fn clear(&mut self);

    fn entry_count(&self) -> usize;
}

/// Strips control characters so message content cannot smuggle terminal
/// escape sequences into the transcript. Newlines and tabs survive.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}
