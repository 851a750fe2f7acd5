use crate::Points;
use crate::REWARD_FIFTH;
use crate::REWARD_FOURTH;
use crate::REWARD_LEADERS;
use crate::REWARD_TRAILING;

/// Points earned by a correct answer, determined by 1-based rank
/// at the moment of answering. Trailing players earn less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reward(Points);

impl From<usize> for Reward {
    fn from(rank: usize) -> Self {
        match rank {
            0..=3 => Self(REWARD_LEADERS),
            4 => Self(REWARD_FOURTH),
            5 => Self(REWARD_FIFTH),
            _ => Self(REWARD_TRAILING),
        }
    }
}

impl From<Reward> for Points {
    fn from(reward: Reward) -> Self {
        reward.0
    }
}
