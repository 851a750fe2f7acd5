use super::*;
use crate::COUNT_MAX;
use crate::COUNT_MIN;
use crate::Count;
use crate::GENERATION_ATTEMPTS;
use crate::TARGET_MAX;
use crate::TARGET_MIN;
use crate::TILES;
use rand::Rng;

/// Builds fresh puzzles from the bank.
///
/// Text and glyphs come from a template with a different title than the
/// previous question; the numbers are synthesized independently:
/// - target uniform in [TARGET_MIN, TARGET_MAX]
/// - two counts uniform in [COUNT_MIN, COUNT_MAX]
/// - a third count either free (if the first two already solve it) or
///   complementing one of them, clamped into range
///
/// Clamping can break the complement, so the whole draw is rejected and
/// retried until some pair hits the target, at most GENERATION_ATTEMPTS times.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    bank: Bank,
}

impl From<Bank> for Generator {
    fn from(bank: Bank) -> Self {
        Self { bank }
    }
}

impl Generator {
    pub fn bank(&self) -> &Bank {
        &self.bank
    }
    /// Question shown before the first round.
    pub fn opening(&self) -> Question {
        self.bank.first().question()
    }
    pub fn generate<R: Rng>(&self, previous: &Question, rng: &mut R) -> Question {
        let template = self.bank.other(previous.title(), rng);
        match (0..GENERATION_ATTEMPTS).find_map(|_| Self::draw(rng)) {
            Some((target, counts)) => template.with(target, counts),
            None => {
                log::warn!(
                    "no solvable draw in {} attempts, reusing {:?} numbers",
                    GENERATION_ATTEMPTS,
                    template.title
                );
                template.question()
            }
        }
    }
    /// One rejection-sampling attempt.
    pub fn draw<R: Rng>(rng: &mut R) -> Option<(Count, [Count; TILES])> {
        let target = rng.random_range(TARGET_MIN..=TARGET_MAX);
        let a = rng.random_range(COUNT_MIN..=COUNT_MAX);
        let b = rng.random_range(COUNT_MIN..=COUNT_MAX);
        let c = if a + b == target {
            rng.random_range(COUNT_MIN..=COUNT_MAX)
        } else {
            let base = if rng.random_bool(0.5) { a } else { b };
            (target as i16 - base as i16).clamp(COUNT_MIN as i16, COUNT_MAX as i16) as Count
        };
        let counts = [a, b, c];
        Question::solve(target, &counts).map(|_| (target, counts))
    }
}
