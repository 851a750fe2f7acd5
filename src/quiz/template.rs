use super::*;
use crate::Count;
use crate::TILES;

/// Static entry of the question bank.
/// Only the text and glyphs survive into generated questions;
/// the numbers are a known-valid puzzle kept for the opening question
/// and as a fallback when generation gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub target: Count,
    pub counts: [Count; TILES],
    pub glyphs: [&'static str; TILES],
}

impl Template {
    pub const MERGE: Self = Self {
        title: "Merge Count",
        description: "Pick two boards so the total matches the sample",
        difficulty: Difficulty::Easy,
        target: 6,
        counts: [2, 1, 4],
        glyphs: ["🦁", "🐻", "🐰"],
    };
    pub const PARTY: Self = Self {
        title: "Animal Party",
        description: "Choose two groups of animals to fill the party",
        difficulty: Difficulty::Easy,
        target: 8,
        counts: [3, 5, 3],
        glyphs: ["🐨", "🐯", "🐸"],
    };
    pub const FARM: Self = Self {
        title: "Farm Count",
        description: "Help the farmer count the animals",
        difficulty: Difficulty::Medium,
        target: 10,
        counts: [4, 6, 3],
        glyphs: ["🐷", "🐮", "🐔"],
    };
    pub const OCEAN: Self = Self {
        title: "Ocean Adventure",
        description: "Combine sea creatures to reach the target",
        difficulty: Difficulty::Medium,
        target: 12,
        counts: [5, 7, 4],
        glyphs: ["🐠", "🐋", "🦈"],
    };

    /// The template's own puzzle, with fresh numbers substituted.
    pub fn with(&self, target: Count, counts: [Count; TILES]) -> Question {
        Question::from((*self, target, counts))
    }
    /// The template's own puzzle, unchanged.
    pub fn question(&self) -> Question {
        self.with(self.target, self.counts)
    }
}

impl From<Template> for Question {
    fn from(template: Template) -> Self {
        template.question()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn builtin_numbers_are_solvable() {
        for t in [Template::MERGE, Template::PARTY, Template::FARM, Template::OCEAN] {
            assert!(t.question().is_solvable(), "{}", t.title);
        }
    }
    #[test]
    fn substitution_keeps_text_and_glyphs() {
        let q = Template::FARM.with(9, [2, 7, 1]);
        assert_eq!(q.title(), Template::FARM.title);
        assert_eq!(q.target(), 9);
        assert_eq!(q.tiles()[1].glyph, "🐮");
        assert_eq!(q.tiles()[1].count, 7);
    }
}
