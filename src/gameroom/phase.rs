/// Lifecycle of a race.
/// Start → Playing → Finished, and Reset re-enters Playing from anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Start,
    Playing,
    Finished,
}
