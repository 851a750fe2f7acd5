use super::*;
use tokio::sync::mpsc::*;

/// Central coordinator for a live race.
/// Owns the single source of truth (Engine), carries out its timer
/// requests, and broadcasts snapshots to every renderer.
///
/// Room runs in a loop on one task, so every mutation is serialized:
/// - Command: forwarded from the presentation layer
/// - Event: fired by the Scheduler
///
/// A snapshot goes out after each step that changed what renderers see.
/// The loop ends when every command sender has been dropped.
pub struct Room {
    engine: Engine,
    scheduler: Scheduler,
    inbox: UnboundedReceiver<Command>,
    renderers: Vec<UnboundedSender<Snapshot>>,
    last: Option<Snapshot>,
}

impl Room {
    /// Returns the room together with the sender the presentation layer
    /// uses to forward start, reset and tile clicks.
    pub fn new(engine: Engine) -> (Self, UnboundedSender<Command>) {
        let (tx, rx) = unbounded_channel();
        let room = Self {
            engine,
            scheduler: Scheduler::default(),
            inbox: rx,
            renderers: Vec::new(),
            last: None,
        };
        (room, tx)
    }
    pub fn watch<R>(&mut self, renderer: R)
    where
        R: Renderer + 'static,
    {
        self.renderers.push(Actor::spawn(Box::new(renderer)));
    }
    /// Drives the race until the command channel closes.
    /// Returns the final snapshot.
    pub async fn run(mut self) -> Snapshot {
        log::info!("[room] open with {} renderers", self.renderers.len());
        self.publish();
        loop {
            tokio::select! {
                command = self.inbox.recv() => match command {
                    Some(command) => self.command(command),
                    None => break,
                },
                Some(event) = self.scheduler.fired() => self.event(event),
            }
            self.publish();
        }
        log::info!("[room] closed after round {}", self.engine.round());
        self.engine.snapshot()
    }
}

impl Room {
    fn command(&mut self, command: Command) {
        let timers = self.engine.handle(command, Self::now());
        self.scheduler.apply(timers);
    }
    fn event(&mut self, event: Event) {
        let timers = self.engine.fire(event, Self::now());
        self.scheduler.apply(timers);
    }
    fn publish(&mut self) {
        let snapshot = self.engine.snapshot();
        if self.last.as_ref() == Some(&snapshot) {
            return;
        }
        self.broadcast(&snapshot);
        self.last = Some(snapshot);
    }
    fn broadcast(&self, snapshot: &Snapshot) {
        self.renderers
            .iter()
            .map(|inbox| inbox.send(snapshot.clone()))
            .collect::<Vec<Result<_, _>>>()
            .into_iter()
            .enumerate()
            .filter_map(|(i, res)| res.err().map(|_| i))
            .for_each(|i| log::warn!("[room] renderer {} is gone", i));
    }
    /// Tokio's clock, so paused-time tests see virtual time.
    fn now() -> std::time::Instant {
        tokio::time::Instant::now().into_std()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BOT_DELAY_MAX;
    use crate::BOT_DELAY_MIN;
    use crate::GOAL;
    use crate::HUMAN;
    use crate::PODIUM;
    use crate::ROUND_PAUSE;
    use std::time::Duration;

    /// Forwards every snapshot to the test body.
    struct Recorder(UnboundedSender<Snapshot>);

    #[async_trait::async_trait]
    impl Renderer for Recorder {
        async fn render(&mut self, snapshot: &Snapshot) {
            let _ = self.0.send(snapshot.clone());
        }
    }

    fn open(seed: u64) -> (
        tokio::task::JoinHandle<Snapshot>,
        UnboundedSender<Command>,
        UnboundedReceiver<Snapshot>,
    ) {
        let (mut room, commands) = Room::new(Engine::seeded(seed));
        let (tx, rx) = unbounded_channel();
        room.watch(Recorder(tx));
        (tokio::spawn(room.run()), commands, rx)
    }
    async fn until<F>(rx: &mut UnboundedReceiver<Snapshot>, f: F) -> Snapshot
    where
        F: Fn(&Snapshot) -> bool,
    {
        loop {
            let snapshot = rx.recv().await.expect("room alive");
            if f(&snapshot) {
                return snapshot;
            }
        }
    }
    fn solve(snapshot: &Snapshot, commands: &UnboundedSender<Command>) {
        let [a, b] = snapshot.current_question.solution().expect("solvable");
        commands.send(Command::Select(a)).unwrap();
        commands.send(Command::Select(b)).unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_initial_snapshot() {
        let (_, _commands, mut rx) = open(1);
        let first = rx.recv().await.unwrap();
        assert_eq!(first.game_state, Phase::Start);
        assert_eq!(first.round, 0);
    }
    #[tokio::test(start_paused = true)]
    async fn bots_answer_within_window() {
        let (_, commands, mut rx) = open(2);
        commands.send(Command::Start).unwrap();
        let started = until(&mut rx, |s| s.game_state == Phase::Playing).await;
        let t0 = tokio::time::Instant::now();
        let first = until(&mut rx, |s| !s.answered_players.is_empty()).await;
        assert!(t0.elapsed() >= BOT_DELAY_MIN);
        assert!(!first.answered_players.contains(&HUMAN));
        let all = until(&mut rx, |s| s.answered_players.len() == 6).await;
        assert!(t0.elapsed() <= BOT_DELAY_MAX);
        assert_eq!(all.round, started.round);
        assert!(all.players.iter().filter(|p| !p.is_human()).all(|p| p.score() > 0));
        assert!(all.players.iter().all(|p| p.answer_time() >= BOT_DELAY_MIN || p.is_human()));
    }
    #[tokio::test(start_paused = true)]
    async fn round_advances_after_pause() {
        let (_, commands, mut rx) = open(3);
        commands.send(Command::Start).unwrap();
        let started = until(&mut rx, |s| s.game_state == Phase::Playing).await;
        solve(&started, &commands);
        let waiting = until(&mut rx, |s| s.waiting_for_others).await;
        assert_eq!(waiting.current_score, Some(10));
        let complete = until(&mut rx, |s| s.answered_players.len() == 7).await;
        let t0 = tokio::time::Instant::now();
        let next = until(&mut rx, |s| s.round == complete.round + 1).await;
        assert!(t0.elapsed() >= ROUND_PAUSE);
        assert!(next.answered_players.is_empty());
        assert!(next.selected_options.is_empty());
        assert_eq!(next.show_result, None);
        assert_ne!(next.current_question.title(), started.current_question.title());
    }
    /// Plays the human perfectly until the podium is decided.
    async fn finish(
        commands: &UnboundedSender<Command>,
        rx: &mut UnboundedReceiver<Snapshot>,
    ) -> Snapshot {
        commands.send(Command::Start).unwrap();
        let mut snapshot = until(rx, |s| s.game_state == Phase::Playing).await;
        loop {
            match snapshot.game_state {
                Phase::Finished => return snapshot,
                _ if snapshot.selected_options.is_empty() => solve(&snapshot, commands),
                _ => {}
            }
            let round = snapshot.round;
            snapshot = until(rx, |s| s.round != round || s.game_state == Phase::Finished).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn race_runs_to_podium() {
        let (_, commands, mut rx) = open(4);
        let snapshot = finish(&commands, &mut rx).await;
        let finishers = snapshot.players.iter().filter(|p| p.score() >= GOAL).count();
        assert!(finishers >= PODIUM);
        assert_eq!(snapshot.podium.standings().len(), PODIUM);
        let times = snapshot
            .podium
            .standings()
            .iter()
            .map(|s| s.answer_time)
            .collect::<Vec<_>>();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }
    #[tokio::test(start_paused = true)]
    async fn reset_mid_round_discards_old_timers() {
        let (_, commands, mut rx) = open(5);
        commands.send(Command::Start).unwrap();
        until(&mut rx, |s| s.game_state == Phase::Playing).await;
        tokio::time::sleep(BOT_DELAY_MIN - Duration::from_millis(1)).await;
        commands.send(Command::Reset).unwrap();
        let reset = until(&mut rx, |s| s.round == 2).await;
        assert!(reset.answered_players.is_empty());
        let t0 = tokio::time::Instant::now();
        until(&mut rx, |s| !s.answered_players.is_empty()).await;
        // the first bot of the new round, not a leftover from the old one
        assert!(t0.elapsed() >= BOT_DELAY_MIN);
    }
    #[tokio::test(start_paused = true)]
    async fn reset_from_podium_starts_fresh_race() {
        let (_, commands, mut rx) = open(7);
        let finished = finish(&commands, &mut rx).await;
        assert!(!finished.podium.standings().is_empty());
        commands.send(Command::Reset).unwrap();
        let fresh = until(&mut rx, |s| s.game_state == Phase::Playing).await;
        let t0 = tokio::time::Instant::now();
        assert!(fresh.round > finished.round);
        assert!(fresh.podium.standings().is_empty());
        assert!(fresh.answered_players.is_empty());
        assert!(fresh.players.iter().all(|p| p.score() == 0 && p.answer_time().is_zero()));
        let first = until(&mut rx, |s| !s.answered_players.is_empty()).await;
        assert!(t0.elapsed() >= BOT_DELAY_MIN);
        assert_eq!(first.round, fresh.round);
        let all = until(&mut rx, |s| s.answered_players.len() == 6).await;
        assert!(t0.elapsed() <= BOT_DELAY_MAX);
        assert_eq!(all.game_state, Phase::Playing);
    }
    #[tokio::test(start_paused = true)]
    async fn closes_when_senders_drop() {
        let (handle, commands, _rx) = open(6);
        commands.send(Command::Start).unwrap();
        drop(commands);
        let last = handle.await.unwrap();
        assert_eq!(last.game_state, Phase::Playing);
    }
}
