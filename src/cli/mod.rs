use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Storage Args ---
    /// History storage type (file, memory)
    #[arg(long, env = "STORAGE_TYPE", default_value = "file")]
    pub storage_type: String,

    /// Directory the persisted history store lives in
    #[arg(long, env = "STORAGE_DIR", default_value = "./data")]
    pub storage_dir: String,

    /// Name of the single key the conversation history is stored under
    #[arg(long, env = "STORAGE_KEY", default_value = "chatHistory")]
    pub storage_key: String,

    // --- Responder Args ---
    /// Reply strategy (keyword)
    #[arg(long, env = "RESPONDER_TYPE", default_value = "keyword")]
    pub responder_type: String,

    /// Artificial delay in milliseconds before a reply is shown
    #[arg(long, env = "REPLY_DELAY_MS", default_value = "700")]
    pub reply_delay_ms: u64,
}
