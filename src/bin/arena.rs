//! arena Binary
//!
//! Runs a race in the terminal: the human against six bots.
//! With `--json`, snapshots are streamed as JSON lines and commands
//! are read line by line from stdin instead.

use clap::Parser;
use sumrace::console::*;
use sumrace::gameroom::*;

#[derive(Parser, Debug)]
#[command(name = "arena", about = "Race simulated opponents to 100 points")]
struct Args {
    /// Stream JSON snapshots and read plain-text commands.
    #[arg(long)]
    json: bool,
    /// Seed the RNG for a reproducible race.
    #[arg(long)]
    seed: Option<u64>,
    /// Only log warnings to the terminal.
    #[arg(long)]
    quiet: bool,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.quiet {
            true => log::LevelFilter::Warn,
            false => log::LevelFilter::Info,
        }
    }
    /// JSON snapshots own stdout, so logs move to stderr.
    fn mode(&self) -> simplelog::TerminalMode {
        match self.json {
            true => simplelog::TerminalMode::Stderr,
            false => simplelog::TerminalMode::Mixed,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    sumrace::log(args.level(), args.mode());
    sumrace::kys();
    let engine = args.seed.map(Engine::seeded).unwrap_or_default();
    let (mut room, commands) = Room::new(engine);
    match args.json {
        true => {
            room.watch(Json::default());
            Lines::spawn(commands);
        }
        false => {
            room.watch(Terminal);
            Keyboard::spawn(commands);
        }
    }
    let last = room.run().await;
    log::info!(
        "left in {:?} after round {} with {} points",
        last.game_state,
        last.round,
        last.players.iter().find(|p| p.is_human()).map_or(0, |p| p.score())
    );
}
