pub mod app;
pub mod cli;
pub mod history;
pub mod models;
pub mod repl;
pub mod responder;
pub mod session;
pub mod storage;
pub mod ui;

use app::ChatApp;
use cli::Args;
use log::info;
use repl::Repl;
use std::error::Error;
use std::time::Duration;
use ui::terminal::{ TerminalPanel, TerminalSidebar };

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Storage Type: {}", args.storage_type);
    info!("Storage Dir: {}", args.storage_dir);
    info!("Storage Key: {}", args.storage_key);
    info!("Responder Type: {}", args.responder_type);
    info!("Reply Delay: {}ms", args.reply_delay_ms);
    info!("-------------------------");

    let storage = storage::initialize_storage(&args)?;
    let responder = responder::new_responder(&args)?;

    let app = ChatApp::new(
        responder,
        storage,
        TerminalPanel::new(),
        TerminalSidebar::new(),
        Duration::from_millis(args.reply_delay_ms)
    );

    Repl::new(app).run().await
}
