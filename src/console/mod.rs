mod json;
mod keyboard;
mod lines;
mod terminal;

pub use json::*;
pub use keyboard::*;
pub use lines::*;
pub use terminal::*;
