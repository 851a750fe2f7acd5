/// Display label attached to a question template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
        }
    }
}
