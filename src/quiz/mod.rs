mod bank;
mod difficulty;
mod generator;
mod question;
mod template;
mod tile;

pub use bank::*;
pub use difficulty::*;
pub use generator::*;
pub use question::*;
pub use template::*;
pub use tile::*;
