use super::*;
use std::time::Duration;
use tokio::sync::mpsc::*;
use tokio::task::AbortHandle;

/// Imperative half of the timer model: turns [`Timer`] requests into
/// sleeping tokio tasks and aborts them by [`Scope`].
///
/// An event can still be sitting in the channel when its timer is cancelled;
/// the engine's generation stamps drop those.
#[derive(Debug)]
pub struct Scheduler {
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
    pending: Vec<(Scope, AbortHandle)>,
}

impl Default for Scheduler {
    fn default() -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            tx,
            rx,
            pending: Vec::new(),
        }
    }
}

impl Scheduler {
    pub fn apply(&mut self, timers: Vec<Timer>) {
        for timer in timers {
            match timer {
                Timer::After(delay, event) => self.schedule(delay, event),
                Timer::Cancel(scope) => self.cancel(scope),
            }
        }
    }
    /// Next fired event. Never resolves to None while the scheduler lives.
    pub async fn fired(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
    /// Timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|(_, h)| !h.is_finished()).count()
    }
    fn schedule(&mut self, delay: Duration, event: Event) {
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event);
        });
        self.pending.retain(|(_, h)| !h.is_finished());
        self.pending.push((event.scope(), task.abort_handle()));
    }
    fn cancel(&mut self, scope: Scope) {
        let before = self.pending.len();
        self.pending.retain(|(s, h)| match scope.covers(*s) {
            true => {
                h.abort();
                false
            }
            false => true,
        });
        log::debug!("[scheduler] cancelled {} {:?} timers", before - self.pending.len(), scope);
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.pending.drain(..).for_each(|(_, h)| h.abort());
    }
}
