use super::*;
use crate::PlayerId;
use crate::Points;
use crate::Round;
use crate::TileId;
use crate::players::*;
use crate::quiz::*;

/// Immutable view of the race handed to renderers after every change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub current_question: Question,
    pub selected_options: Vec<TileId>,
    pub show_result: Option<Verdict>,
    pub streak: usize,
    pub current_score: Option<Points>,
    pub game_state: Phase,
    pub round: Round,
    pub answered_players: Vec<PlayerId>,
    pub waiting_for_others: bool,
    pub podium: Podium,
}

impl From<&Engine> for Snapshot {
    fn from(engine: &Engine) -> Self {
        Self {
            players: engine.roster().players().to_vec(),
            current_question: engine.question().clone(),
            selected_options: engine.selection().to_vec(),
            show_result: engine.verdict(),
            streak: engine.streak(),
            current_score: engine.flash(),
            game_state: engine.phase(),
            round: engine.round(),
            answered_players: engine.answered().iter().copied().collect(),
            waiting_for_others: engine.is_waiting(),
            podium: match engine.phase() {
                Phase::Finished => engine.roster().podium(),
                _ => Podium::default(),
            },
        }
    }
}
