mod medal;
mod player;
mod podium;
mod roster;

pub use medal::*;
pub use player::*;
pub use podium::*;
pub use roster::*;
