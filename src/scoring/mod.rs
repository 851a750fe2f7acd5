mod evaluation;
mod reward;

pub use evaluation::*;
pub use reward::*;
