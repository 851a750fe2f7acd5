/// Podium placement shown at the end of a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Self; 3] = [Self::Gold, Self::Silver, Self::Bronze];
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Gold => write!(f, "🥇"),
            Self::Silver => write!(f, "🥈"),
            Self::Bronze => write!(f, "🥉"),
        }
    }
}
