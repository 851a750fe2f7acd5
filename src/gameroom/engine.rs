use super::*;
use crate::BOT_DELAY_MAX;
use crate::BOT_DELAY_MIN;
use crate::FLASH_DISPLAY;
use crate::HUMAN;
use crate::PODIUM;
use crate::PlayerId;
use crate::Points;
use crate::ROUND_PAUSE;
use crate::Round;
use crate::TileId;
use crate::WRONG_DISPLAY;
use crate::players::*;
use crate::quiz::*;
use crate::scoring::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeSet;
use std::time::Duration;
use std::time::Instant;

/// Functional core of the race.
/// Owns all simulation state and never sleeps or spawns: every input comes in
/// through [`Engine::handle`] or [`Engine::fire`] together with the current
/// time, and every delayed effect goes out as a [`Timer`] request.
/// Driven by Room (imperative shell) which owns the actual timers.
///
/// Stale timers are neutralized by generation stamps: `round` advances with
/// every new question and `epoch` with every start/reset.
#[derive(Debug)]
pub struct Engine {
    phase: Phase,
    roster: Roster,
    generator: Generator,
    question: Question,
    rng: SmallRng,
    selection: Vec<TileId>,
    verdict: Option<Verdict>,
    answered: BTreeSet<PlayerId>,
    streak: usize,
    flash: Option<Points>,
    round: Round,
    epoch: u64,
    started: Instant,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(
            Roster::default(),
            Generator::default(),
            SmallRng::from_rng(&mut rand::rng()),
        )
    }
}

impl Engine {
    pub fn new(roster: Roster, generator: Generator, rng: SmallRng) -> Self {
        Self {
            phase: Phase::Start,
            question: generator.opening(),
            roster,
            generator,
            rng,
            selection: Vec::new(),
            verdict: None,
            answered: BTreeSet::new(),
            streak: 0,
            flash: None,
            round: 0,
            epoch: 0,
            started: Instant::now(),
        }
    }
    /// Deterministic engine over the default roster and bank.
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            Roster::default(),
            Generator::default(),
            SmallRng::seed_from_u64(seed),
        )
    }
}

impl Engine {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn question(&self) -> &Question {
        &self.question
    }
    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }
    pub fn answered(&self) -> &BTreeSet<PlayerId> {
        &self.answered
    }
    pub fn streak(&self) -> usize {
        self.streak
    }
    pub fn flash(&self) -> Option<Points> {
        self.flash
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
    /// Human has solved this round and bots are still racing.
    pub fn is_waiting(&self) -> bool {
        self.phase == Phase::Playing
            && self.answered.contains(&HUMAN)
            && self.answered.len() < self.roster.len()
    }
    pub fn is_round_complete(&self) -> bool {
        self.answered.len() == self.roster.len()
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

/// Inputs: presentation commands and fired timers.
impl Engine {
    pub fn handle(&mut self, command: Command, now: Instant) -> Vec<Timer> {
        log::debug!("[engine] command {:?} while {:?}", command, self.phase);
        match command {
            Command::Start if self.phase == Phase::Start => self.commence(now),
            Command::Start => Vec::new(),
            Command::Reset => self.commence(now),
            Command::Select(tile) => self.select(tile, now),
        }
    }
    pub fn fire(&mut self, event: Event, now: Instant) -> Vec<Timer> {
        if !self.is_current(&event) {
            log::debug!("[engine] dropping stale {:?}", event);
            return Vec::new();
        }
        match event {
            Event::Answer { player, .. } => self.bot(player, now),
            Event::Advance { .. } => self.advance(now),
            Event::Unselect { .. } => self.unselect(),
            Event::Unflash { .. } => {
                self.flash = None;
                Vec::new()
            }
        }
    }
    fn is_current(&self, event: &Event) -> bool {
        match *event {
            Event::Unflash { epoch } => epoch == self.epoch,
            Event::Answer { round, .. } | Event::Unselect { round } | Event::Advance { round } => {
                round == self.round && self.phase == Phase::Playing
            }
        }
    }
}

/// Round controller.
impl Engine {
    fn commence(&mut self, now: Instant) -> Vec<Timer> {
        self.phase = Phase::Playing;
        self.epoch += 1;
        self.roster.reset();
        self.streak = 0;
        self.flash = None;
        log::info!("[engine] race {} begins", self.epoch);
        std::iter::once(Timer::Cancel(Scope::Game))
            .chain(self.next_round(now))
            .collect()
    }
    fn advance(&mut self, now: Instant) -> Vec<Timer> {
        if !self.is_round_complete() || self.roster.finishers() >= PODIUM {
            return Vec::new();
        }
        self.next_round(now)
    }
    fn next_round(&mut self, now: Instant) -> Vec<Timer> {
        self.round += 1;
        self.question = self.generator.generate(&self.question, &mut self.rng);
        self.selection.clear();
        self.verdict = None;
        self.answered.clear();
        self.started = now;
        log::info!("[engine] round {}: {}", self.round, self.question);
        let round = self.round;
        let bots = self.roster.bots().collect::<Vec<_>>();
        std::iter::once(Timer::Cancel(Scope::Round))
            .chain(
                bots.into_iter()
                    .map(|player| Timer::After(self.delay(), Event::Answer { round, player })),
            )
            .collect()
    }
    /// Bot answer delay, uniform over [BOT_DELAY_MIN, BOT_DELAY_MAX].
    fn delay(&mut self) -> Duration {
        let lo = BOT_DELAY_MIN.as_millis() as u64;
        let hi = BOT_DELAY_MAX.as_millis() as u64;
        Duration::from_millis(self.rng.random_range(lo..=hi))
    }
    /// Records a scored answer, then checks for the end of the race
    /// (eagerly, mid-round) and for the end of the round.
    fn credit(&mut self, player: PlayerId, delta: Points, now: Instant) -> Vec<Timer> {
        let elapsed = now.saturating_duration_since(self.started);
        let gained = self.roster.award(player, delta, elapsed);
        self.answered.insert(player);
        log::debug!("[engine] P{} +{} after {:?}", player, gained, elapsed);
        if self.roster.finishers() >= PODIUM {
            self.phase = Phase::Finished;
            log::info!(
                "[engine] race {} finished in round {}: {:?}",
                self.epoch,
                self.round,
                self.roster.podium().standings().iter().map(|s| s.id).collect::<Vec<_>>()
            );
            return vec![Timer::Cancel(Scope::Round)];
        }
        if self.is_round_complete() {
            log::debug!("[engine] round {} complete", self.round);
            return vec![Timer::After(ROUND_PAUSE, Event::Advance { round: self.round })];
        }
        Vec::new()
    }
}

/// Answer evaluation for the human and the bots.
impl Engine {
    fn select(&mut self, tile: TileId, now: Instant) -> Vec<Timer> {
        if self.phase != Phase::Playing || self.verdict.is_some() {
            return Vec::new();
        }
        if let Some(i) = self.selection.iter().position(|t| *t == tile) {
            self.selection.remove(i);
            return Vec::new();
        }
        if self.selection.len() >= 2 {
            return Vec::new();
        }
        self.selection.push(tile);
        match self.selection.len() {
            2 => self.check([self.selection[0], self.selection[1]], now),
            _ => Vec::new(),
        }
    }
    fn check(&mut self, pair: [TileId; 2], now: Instant) -> Vec<Timer> {
        let evaluation = Evaluation::evaluate(pair, &self.question, &self.roster, HUMAN);
        log::debug!("[engine] human picked {:?}: {:?}", pair, evaluation);
        if !evaluation.correct() {
            self.verdict = Some(Verdict::Wrong);
            self.streak = 0;
            return vec![Timer::After(
                WRONG_DISPLAY,
                Event::Unselect { round: self.round },
            )];
        }
        self.verdict = Some(Verdict::Correct);
        self.streak += 1;
        self.flash = Some(evaluation.delta());
        let mut timers = self.credit(HUMAN, evaluation.delta(), now);
        timers.push(Timer::After(
            FLASH_DISPLAY,
            Event::Unflash { epoch: self.epoch },
        ));
        timers
    }
    fn unselect(&mut self) -> Vec<Timer> {
        if self.verdict == Some(Verdict::Wrong) {
            self.selection.clear();
            self.verdict = None;
        }
        Vec::new()
    }
    fn bot(&mut self, player: PlayerId, now: Instant) -> Vec<Timer> {
        if self.answered.contains(&player) {
            return Vec::new();
        }
        match self.roster.rank(player) {
            Some(rank) => self.credit(player, Points::from(Reward::from(rank)), now),
            None => {
                log::warn!("[engine] answer from unknown player {}", player);
                Vec::new()
            }
        }
    }
}
