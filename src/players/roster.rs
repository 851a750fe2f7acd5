use super::*;
use crate::GOAL;
use crate::HUMAN;
use crate::PODIUM;
use crate::PlayerId;
use crate::Points;
use std::collections::HashSet;
use std::time::Duration;

/// Ordered list of every racer. Order is fixed at construction
/// and breaks ties between equal scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster(Vec<Player>);

impl Default for Roster {
    fn default() -> Self {
        Self(vec![
            Player::new(HUMAN, "You").with_multiplier(10),
            Player::new(2, "Barack").with_multiplier(5),
            Player::new(3, "Lemon"),
            Player::new(4, "Summer"),
            Player::new(5, "Sapling").with_multiplier(3),
            Player::new(6, "labob"),
            Player::new(7, "Giggles"),
        ])
    }
}

impl Roster {
    /// Ids must be unique and exactly one of them must be HUMAN.
    /// Fewer than PODIUM players could never end a race.
    pub fn new(players: Vec<Player>) -> anyhow::Result<Self> {
        if players.len() < PODIUM {
            anyhow::bail!("roster needs at least {} players, got {}", PODIUM, players.len());
        }
        let ids = players.iter().map(Player::id).collect::<HashSet<_>>();
        if ids.len() != players.len() {
            anyhow::bail!("duplicate player ids in roster");
        }
        if !ids.contains(&HUMAN) {
            anyhow::bail!("roster has no human player (id {})", HUMAN);
        }
        Ok(Self(players))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.0.iter().find(|p| p.id() == id)
    }
    pub fn players(&self) -> &[Player] {
        &self.0
    }
    pub fn bots(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.0.iter().filter(|p| !p.is_human()).map(Player::id)
    }
    /// 1-based rank by descending score, stable over roster order.
    pub fn rank(&self, id: PlayerId) -> Option<usize> {
        let mut sorted = self.0.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.score().cmp(&a.score()));
        sorted.iter().position(|p| p.id() == id).map(|i| i + 1)
    }
    /// Applies a reward, clamped at GOAL. Returns points actually gained.
    pub fn award(&mut self, id: PlayerId, delta: Points, elapsed: Duration) -> Points {
        match self.0.iter_mut().find(|p| p.id() == id) {
            Some(player) => player.credit(delta, elapsed),
            None => {
                log::warn!("award for unknown player {}", id);
                0
            }
        }
    }
    /// Number of players at or above GOAL.
    pub fn finishers(&self) -> usize {
        self.0.iter().filter(|p| p.score() >= GOAL).count()
    }
    pub fn podium(&self) -> Podium {
        Podium::from(self)
    }
    pub fn reset(&mut self) {
        self.0.iter_mut().for_each(Player::reset);
    }
}
