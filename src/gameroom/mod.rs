mod actor;
mod command;
mod engine;
mod event;
mod phase;
mod renderer;
mod room;
mod scheduler;
mod snapshot;
mod timer;
mod verdict;

pub use actor::*;
pub use command::*;
pub use engine::*;
pub use event::*;
pub use phase::*;
pub use renderer::*;
pub use room::*;
pub use scheduler::*;
pub use snapshot::*;
pub use timer::*;
pub use verdict::*;
