use super::*;
use crate::Count;
use crate::TILES;
use crate::TileId;

/// A single puzzle: pick two tiles whose counts sum to `target`.
/// Immutable once built; the round controller replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    title: &'static str,
    description: &'static str,
    difficulty: Difficulty,
    #[serde(rename = "targetCount")]
    target: Count,
    #[serde(rename = "options")]
    tiles: [Tile; TILES],
}

impl From<(Template, Count, [Count; TILES])> for Question {
    fn from((template, target, counts): (Template, Count, [Count; TILES])) -> Self {
        Self {
            title: template.title,
            description: template.description,
            difficulty: template.difficulty,
            target,
            tiles: std::array::from_fn(|i| Tile::from((i + 1, counts[i], template.glyphs[i]))),
        }
    }
}

impl Question {
    pub fn title(&self) -> &'static str {
        self.title
    }
    pub fn description(&self) -> &'static str {
        self.description
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn target(&self) -> Count {
        self.target
    }
    pub fn tiles(&self) -> &[Tile; TILES] {
        &self.tiles
    }
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }
    /// Sum of the selected tiles. Unknown ids contribute nothing.
    pub fn sum(&self, ids: &[TileId]) -> u16 {
        ids.iter()
            .map(|id| self.tile(*id).map_or(0, |t| t.count as u16))
            .sum()
    }
    /// First unordered pair of distinct tiles that hits the target.
    pub fn solution(&self) -> Option<[TileId; 2]> {
        Self::solve(self.target, &self.tiles.map(|t| t.count))
            .map(|(i, j)| [self.tiles[i].id, self.tiles[j].id])
    }
    pub fn is_solvable(&self) -> bool {
        self.solution().is_some()
    }
    /// Index pair (i < j) of counts summing to target, if any.
    pub fn solve(target: Count, counts: &[Count]) -> Option<(usize, usize)> {
        (0..counts.len())
            .flat_map(|i| (i + 1..counts.len()).map(move |j| (i, j)))
            .find(|&(i, j)| counts[i] as u16 + counts[j] as u16 == target as u16)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} [{}] target {}", self.title, self.difficulty, self.target)
    }
}
