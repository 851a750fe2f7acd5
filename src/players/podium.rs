use super::*;
use crate::PlayerId;
use std::time::Duration;

/// One finisher on the podium.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub medal: Medal,
    pub id: PlayerId,
    pub name: String,
    #[serde(serialize_with = "super::player::millis")]
    pub answer_time: Duration,
}

/// Finishers ordered by ascending answer time, at most three.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Podium(Vec<Standing>);

impl From<&Roster> for Podium {
    fn from(roster: &Roster) -> Self {
        let mut finishers = roster
            .iter()
            .filter(|p| p.is_finished())
            .collect::<Vec<_>>();
        finishers.sort_by_key(|p| p.answer_time());
        Self(
            finishers
                .into_iter()
                .zip(Medal::ALL)
                .map(|(p, medal)| Standing {
                    medal,
                    id: p.id(),
                    name: p.name().to_string(),
                    answer_time: p.answer_time(),
                })
                .collect(),
        )
    }
}

impl Podium {
    pub fn standings(&self) -> &[Standing] {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GOAL;
    #[test]
    fn fastest_finishers_win() {
        let mut roster = Roster::default();
        roster.award(4, GOAL, Duration::from_millis(4000));
        roster.award(2, GOAL, Duration::from_millis(3100));
        roster.award(6, GOAL, Duration::from_millis(4900));
        roster.award(1, GOAL, Duration::from_millis(3600));
        roster.award(3, 90, Duration::from_millis(1));
        let podium = Podium::from(&roster);
        let ids = podium.standings().iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 1, 4]);
        assert_eq!(podium.standings()[0].medal, Medal::Gold);
        assert_eq!(podium.standings()[2].medal, Medal::Bronze);
    }
    #[test]
    fn ties_keep_roster_order() {
        let mut roster = Roster::default();
        roster.award(5, GOAL, Duration::from_secs(4));
        roster.award(3, GOAL, Duration::from_secs(4));
        let ids = Podium::from(&roster)
            .standings()
            .iter()
            .map(|s| s.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 5]);
    }
    #[test]
    fn empty_without_finishers() {
        assert!(Podium::from(&Roster::default()).is_empty());
    }
}
