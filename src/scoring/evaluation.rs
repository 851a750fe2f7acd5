use super::*;
use crate::PlayerId;
use crate::Points;
use crate::TileId;
use crate::players::*;
use crate::quiz::*;

/// Outcome of checking a pair of tiles for a given player.
/// The delta is the nominal reward; the roster clamps it at GOAL when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    correct: bool,
    delta: Points,
}

impl Evaluation {
    /// Pure check: does not touch the roster.
    /// Rank is taken from the standings at the moment of evaluation.
    pub fn evaluate(
        selection: [TileId; 2],
        question: &Question,
        roster: &Roster,
        player: PlayerId,
    ) -> Self {
        let correct = question.sum(&selection) == question.target() as u16;
        let delta = match correct {
            true => roster
                .rank(player)
                .map(Reward::from)
                .map(Points::from)
                .unwrap_or_default(),
            false => 0,
        };
        Self { correct, delta }
    }
    pub fn correct(&self) -> bool {
        self.correct
    }
    pub fn delta(&self) -> Points {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HUMAN;
    use std::time::Duration;

    fn standings(scores: &[Points]) -> Roster {
        let mut roster = Roster::default();
        for (i, s) in scores.iter().enumerate() {
            roster.award(i + 1, *s, Duration::ZERO);
        }
        roster
    }
    #[test]
    fn wrong_pair_scores_nothing() {
        let q = Template::MERGE.question();
        let e = Evaluation::evaluate([1, 2], &q, &Roster::default(), HUMAN);
        assert!(!e.correct());
        assert_eq!(e.delta(), 0);
    }
    #[test]
    fn correct_pair_uses_rank() {
        let q = Template::MERGE.question();
        let roster = standings(&[0, 60, 50, 40, 30, 20, 10]);
        let e = Evaluation::evaluate([1, 3], &q, &roster, HUMAN);
        assert!(e.correct());
        assert_eq!(e.delta(), 4);
        let e = Evaluation::evaluate([3, 1], &q, &roster, 2);
        assert_eq!(e.delta(), 10);
        assert_eq!(Evaluation::evaluate([1, 3], &q, &roster, 5).delta(), 6);
        assert_eq!(Evaluation::evaluate([1, 3], &q, &roster, 6).delta(), 5);
    }
    #[test]
    fn missing_tile_counts_as_zero() {
        let q = Template::PARTY.with(5, [5, 1, 1]);
        let e = Evaluation::evaluate([1, 9], &q, &Roster::default(), HUMAN);
        assert!(e.correct());
    }
    #[test]
    fn leader_near_goal() {
        let q = Template::FARM.with(8, [2, 6, 7]);
        let roster = standings(&[91, 85, 80, 70, 60, 50, 40]);
        let e = Evaluation::evaluate([1, 2], &q, &roster, HUMAN);
        assert!(e.correct());
        assert_eq!(e.delta(), 10);
    }
}
