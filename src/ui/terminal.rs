use super::{ sanitize, HistorySidebar, TranscriptPanel };
use crate::models::chat::{ HistoryEntry, Role };

/// Prints role-tagged blocks to stdout and keeps the rendered block list so
/// the panel can be inspected and counted.
pub struct TerminalPanel {
    blocks: Vec<(Role, String)>,
}

impl TerminalPanel {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn blocks(&self) -> &[(Role, String)] {
        &self.blocks
    }

    fn print_block(role: Role, text: &str) {
        let label = match role {
            Role::User => "Você",
            Role::System => "IA",
        };
        println!("[{}] {}", label, text);
    }
}

impl Default for TerminalPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptPanel for TerminalPanel {
    fn append(&mut self, role: Role, text: &str) {
        let text = sanitize(text);
        Self::print_block(role, &text);
        self.blocks.push((role, text));
    }

    fn reset(&mut self, welcome: &str) {
        self.blocks.clear();
        println!();
        Self::print_block(Role::System, welcome);
        self.blocks.push((Role::System, welcome.to_string()));
    }

    fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

pub struct TerminalSidebar {
    entries: Vec<HistoryEntry>,
}

impl TerminalSidebar {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Prints the numbered conversation index (the `/history` command).
    pub fn print_entries(&self) {
        if self.entries.is_empty() {
            println!("Nenhuma conversa salva.");
            return;
        }

        println!("Conversas salvas:");
        for entry in &self.entries {
            println!("  {}: {}", entry.index, entry.title);
        }
    }
}

impl Default for TerminalSidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl HistorySidebar for TerminalSidebar {
    fn rebuild(&mut self, entries: &[HistoryEntry]) {
        self.entries = entries.to_vec();
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
