use std::error::Error as StdError;
use std::io::Write;
use tokio::io::{ AsyncBufReadExt, BufReader, Lines, Stdin };

use crate::app::ChatApp;
use crate::ui::terminal::{ TerminalPanel, TerminalSidebar };

/// Line-oriented front end: each submitted line is either a slash command
/// or a chat message.
pub struct Repl {
    app: ChatApp<TerminalPanel, TerminalSidebar>,
}

impl Repl {
    pub fn new(app: ChatApp<TerminalPanel, TerminalSidebar>) -> Self {
        Self { app }
    }

    pub async fn run(mut self) -> Result<(), Box<dyn StdError + Send + Sync>> {
        self.app.start().await;
        print_help();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print_prompt()?;
            let line = match lines.next_line().await? {
                Some(line) => line,
                None => break,
            };
            let input = line.trim();

            match input {
                "/quit" | "/sair" => break,
                "/history" => {
                    self.app.refresh_sidebar().await;
                    self.app.sidebar().print_entries();
                }
                "/clear" => {
                    if confirm_clear(&mut lines).await? {
                        self.app.clear_history().await?;
                    }
                }
                _ if input.starts_with("/load") => {
                    match input.trim_start_matches("/load").trim().parse::<usize>() {
                        Ok(index) => self.app.load_conversation(index).await,
                        Err(_) => println!("Uso: /load <número da conversa>"),
                    }
                }
                _ if input.starts_with('/') => print_help(),
                _ => {
                    self.app.send_message(input).await?;
                }
            }
        }

        Ok(())
    }
}

fn print_help() {
    println!("Comandos: /history  /load <n>  /clear  /quit");
}

fn print_prompt() -> Result<(), std::io::Error> {
    print!("> ");
    std::io::stdout().flush()
}

async fn confirm_clear(
    lines: &mut Lines<BufReader<Stdin>>
) -> Result<bool, Box<dyn StdError + Send + Sync>> {
    print!("Tem certeza que deseja EXCLUIR TODO o histórico de conversas? [s/N] ");
    std::io::stdout().flush()?;

    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "s" | "sim"))
}
