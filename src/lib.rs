//! Pick-two-tiles arithmetic race against simulated opponents.
//!
//! The crate is split into a pure simulation ([`gameroom::Engine`]) and an
//! async shell ([`gameroom::Room`]) that drives it with tokio timers and
//! broadcasts [`gameroom::Snapshot`]s to whatever renders them.
pub mod gameroom;
pub mod players;
pub mod quiz;
pub mod scoring;

#[cfg(feature = "console")]
pub mod console;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Points on the race track, always within [0, GOAL].
pub type Points = u16;
/// Number of glyphs drawn on a tile, and the target a pair must sum to.
pub type Count = u8;
/// Stable player identifier. The human is always HUMAN.
pub type PlayerId = usize;
/// Tile identifier within a question, 1-based.
pub type TileId = usize;
/// Generation stamp of the active question.
pub type Round = u64;

// ============================================================================
// RACE RULES
// ============================================================================
/// Score that counts as crossing the finish line.
pub const GOAL: Points = 100;
/// Number of finishers that ends the game.
pub const PODIUM: usize = 3;
/// Id of the only human-controlled player.
pub const HUMAN: PlayerId = 1;

// ============================================================================
// RANK-BASED REWARDS
// ============================================================================
/// Points for a correct answer while ranked 1st to 3rd.
pub const REWARD_LEADERS: Points = 10;
/// Points for a correct answer while ranked 4th.
pub const REWARD_FOURTH: Points = 6;
/// Points for a correct answer while ranked 5th.
pub const REWARD_FIFTH: Points = 5;
/// Points for a correct answer while ranked 6th or lower.
pub const REWARD_TRAILING: Points = 4;

// ============================================================================
// QUESTION GENERATION
// Target drawn from [TARGET_MIN, TARGET_MAX], tile counts from [COUNT_MIN, COUNT_MAX].
// ============================================================================
pub const TARGET_MIN: Count = 4;
pub const TARGET_MAX: Count = 12;
pub const COUNT_MIN: Count = 1;
pub const COUNT_MAX: Count = 7;
/// Tiles per question.
pub const TILES: usize = 3;
/// Upper bound on rejection-sampling draws before falling back to template numbers.
pub const GENERATION_ATTEMPTS: usize = 4096;

// ============================================================================
// TIMING
// ============================================================================
/// Earliest bot answer after the round starts.
pub const BOT_DELAY_MIN: std::time::Duration = std::time::Duration::from_millis(3000);
/// Latest bot answer after the round starts.
pub const BOT_DELAY_MAX: std::time::Duration = std::time::Duration::from_millis(5000);
/// Pause between the last answer of a round and the next question.
pub const ROUND_PAUSE: std::time::Duration = std::time::Duration::from_secs(1);
/// How long a wrong selection stays on screen before it is cleared.
pub const WRONG_DISPLAY: std::time::Duration = std::time::Duration::from_secs(1);
/// How long the "+N" score flash stays on screen.
pub const FLASH_DISPLAY: std::time::Duration = std::time::Duration::from_secs(2);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, `term` level to terminal.
/// `mode` picks the terminal streams; use Stderr when stdout carries data.
#[cfg(feature = "console")]
pub fn log(term: log::LevelFilter, mode: simplelog::TerminalMode) {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        term,
        config.clone(),
        mode,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "console")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
