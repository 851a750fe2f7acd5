use crate::TileId;

/// Inputs forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    Select(TileId),
}

impl TryFrom<&str> for Command {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "start" | "s" => Ok(Self::Start),
            "reset" | "r" => Ok(Self::Reset),
            other => other
                .parse::<TileId>()
                .map(Self::Select)
                .map_err(|_| anyhow::anyhow!("unrecognized command {:?}", other)),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Reset => write!(f, "reset"),
            Self::Select(tile) => write!(f, "{}", tile),
        }
    }
}
