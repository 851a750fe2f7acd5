use super::*;
use crate::PlayerId;
use crate::Round;

/// Delayed effects, stamped with the generation they were scheduled under.
/// The engine drops any event whose stamp no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A bot solves the current question.
    Answer { round: Round, player: PlayerId },
    /// A wrong selection has been on screen long enough.
    Unselect { round: Round },
    /// Everyone answered; move to the next question.
    Advance { round: Round },
    /// The "+N" flash has been on screen long enough.
    Unflash { epoch: u64 },
}

impl Event {
    pub fn scope(&self) -> Scope {
        match self {
            Self::Unflash { .. } => Scope::Game,
            _ => Scope::Round,
        }
    }
}
