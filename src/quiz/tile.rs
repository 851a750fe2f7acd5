use crate::Count;
use crate::TileId;

/// One clickable option: `count` copies of `glyph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Tile {
    pub id: TileId,
    pub count: Count,
    #[serde(rename = "image")]
    pub glyph: &'static str,
}

impl From<(TileId, Count, &'static str)> for Tile {
    fn from((id, count, glyph): (TileId, Count, &'static str)) -> Self {
        Self { id, count, glyph }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.glyph.repeat(self.count as usize))
    }
}
