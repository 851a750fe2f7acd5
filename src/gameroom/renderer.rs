use super::*;

/// Presentation collaborator: anything that displays race snapshots.
/// A terminal, a JSON stream, a test recorder.
///
/// Renderers never mutate the race; input travels separately as
/// [`Command`]s through the room's command sender.
#[async_trait::async_trait]
pub trait Renderer: Send {
    /// Called after every state change with the latest snapshot.
    async fn render(&mut self, snapshot: &Snapshot);
}
