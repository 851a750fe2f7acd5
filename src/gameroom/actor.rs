use super::*;
use tokio::sync::mpsc::*;

/// Wrapper that runs a Renderer in its own async task,
/// so a slow renderer never stalls the room loop.
/// Exits once the room drops its sender.
pub struct Actor {
    renderer: Box<dyn Renderer>,
    getter: UnboundedReceiver<Snapshot>,
}

impl Actor {
    pub fn spawn(renderer: Box<dyn Renderer>) -> UnboundedSender<Snapshot> {
        let (tx, rx) = unbounded_channel();
        let actor = Self {
            renderer,
            getter: rx,
        };
        tokio::spawn(actor.run());
        tx
    }
    async fn run(mut self) {
        while let Some(ref snapshot) = self.getter.recv().await {
            self.renderer.render(snapshot).await;
        }
    }
}
