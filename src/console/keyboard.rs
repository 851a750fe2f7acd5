use crate::TileId;
use crate::gameroom::*;
use dialoguer::Select;
use tokio::sync::mpsc::UnboundedSender;

/// Interactive menu on the terminal. Runs on its own thread
/// since dialoguer blocks; picking quit drops the sender.
pub struct Keyboard;

impl Keyboard {
    const ITEMS: [&'static str; 6] = ["tile 1", "tile 2", "tile 3", "start", "reset", "quit"];

    pub fn spawn(tx: UnboundedSender<Command>) -> std::thread::JoinHandle<()> {
        std::thread::spawn(move || {
            while let Some(command) = Self::prompt() {
                if tx.send(command).is_err() {
                    break;
                }
            }
            log::info!("keyboard closed");
        })
    }
    fn prompt() -> Option<Command> {
        Select::new()
            .with_prompt("your move")
            .items(&Self::ITEMS)
            .default(0)
            .report(false)
            .interact()
            .inspect_err(|e| log::warn!("keyboard: {}", e))
            .ok()
            .and_then(Self::command)
    }
    fn command(index: usize) -> Option<Command> {
        match index {
            0..=2 => Some(Command::Select(index as TileId + 1)),
            3 => Some(Command::Start),
            4 => Some(Command::Reset),
            _ => None,
        }
    }
}
