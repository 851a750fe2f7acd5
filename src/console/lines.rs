use crate::gameroom::*;
use std::io::BufRead;
use tokio::sync::mpsc::UnboundedSender;

/// Reads commands from stdin, one per line (`start`, `reset`, a tile id).
/// `quit` or end of input drops the sender, which closes the room.
pub struct Lines;

impl Lines {
    pub fn spawn(tx: UnboundedSender<Command>) -> std::thread::JoinHandle<()> {
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if matches!(line.trim(), "quit" | "q") {
                    break;
                }
                match Command::try_from(line.as_str()) {
                    Ok(command) if tx.send(command).is_ok() => continue,
                    Ok(_) => break,
                    Err(e) => log::warn!("{}", e),
                }
            }
            log::info!("input closed");
        })
    }
}
