use super::*;
use std::time::Duration;

/// Lifetime of a pending timer.
/// Round timers die with the question; game timers die on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Round,
    Game,
}

impl Scope {
    pub fn covers(&self, other: Scope) -> bool {
        match self {
            Self::Game => true,
            Self::Round => other == Self::Round,
        }
    }
}

/// Timer request emitted by the engine for the scheduler to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer {
    After(Duration, Event),
    Cancel(Scope),
}
