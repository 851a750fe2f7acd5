use crate::GOAL;
use crate::HUMAN;
use crate::PlayerId;
use crate::Points;
use std::time::Duration;

/// A racer on the leaderboard. Only the scoring rule mutates it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    id: PlayerId,
    name: String,
    score: Points,
    progress: Points,
    #[serde(serialize_with = "millis")]
    answer_time: Duration,
    #[serde(skip_serializing_if = "Option::is_none")]
    multiplier: Option<u8>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            progress: 0,
            answer_time: Duration::ZERO,
            multiplier: None,
        }
    }
    /// Display-only badge carried over from the lobby.
    pub fn with_multiplier(self, multiplier: u8) -> Self {
        Self {
            multiplier: Some(multiplier),
            ..self
        }
    }
    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn score(&self) -> Points {
        self.score
    }
    pub fn progress(&self) -> Points {
        self.progress
    }
    pub fn answer_time(&self) -> Duration {
        self.answer_time
    }
    pub fn multiplier(&self) -> Option<u8> {
        self.multiplier
    }
    pub fn is_human(&self) -> bool {
        self.id == HUMAN
    }
    pub fn is_finished(&self) -> bool {
        self.score >= GOAL
    }
    /// Adds `delta` clamped at GOAL and stamps the answer time.
    /// Returns the points actually gained.
    pub fn credit(&mut self, delta: Points, elapsed: Duration) -> Points {
        let before = self.score;
        self.score = before.saturating_add(delta).min(GOAL);
        self.progress = self.score;
        self.answer_time = elapsed;
        self.score - before
    }
    pub fn reset(&mut self) {
        self.score = 0;
        self.progress = 0;
        self.answer_time = Duration::ZERO;
    }
}

pub(super) fn millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(duration.as_millis() as u64)
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{} {} ({})", self.id, self.name, self.score)
    }
}
