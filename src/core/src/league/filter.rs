use crate::League;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LEAGUE_LIMIT: u32 = 100;
pub const MAX_LEAGUE_LIMIT: u32 = 100;

/// Selection applied by repositories: `active` first, then `skip`, then `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueFilter {
    pub active: Option<bool>,
    pub skip: u32,
    pub limit: u32,
}

impl Default for LeagueFilter {
    fn default() -> Self {
        LeagueFilter {
            active: None,
            skip: 0,
            limit: DEFAULT_LEAGUE_LIMIT,
        }
    }
}

impl LeagueFilter {
    pub fn active(active: bool) -> Self {
        LeagueFilter {
            active: Some(active),
            ..Default::default()
        }
    }

    pub fn matches(&self, league: &League) -> bool {
        self.active.is_none_or(|active| league.active == active)
    }

    pub fn apply<'a, I>(&self, leagues: I) -> Vec<League>
    where
        I: IntoIterator<Item = &'a League>,
    {
        leagues
            .into_iter()
            .filter(|league| self.matches(league))
            .skip(self.skip as usize)
            .take(self.limit as usize)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leagues() -> Vec<League> {
        vec![
            League::new(1, "NBA", "nba"),
            League::new(2, "WNBA", "wnba").inactive(),
            League::new(3, "NFL", "nfl"),
            League::new(4, "MLS", "mls"),
        ]
    }

    fn ids(leagues: &[League]) -> Vec<u32> {
        leagues.iter().map(|l| l.id).collect()
    }

    #[test]
    fn test_default_keeps_everything_in_order() {
        let all = leagues();
        assert_eq!(ids(&LeagueFilter::default().apply(&all)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_active_filter_runs_before_skip() {
        let all = leagues();
        let filter = LeagueFilter {
            active: Some(true),
            skip: 1,
            limit: 100,
        };

        assert_eq!(ids(&filter.apply(&all)), vec![3, 4]);
    }

    #[test]
    fn test_limit() {
        let all = leagues();
        let filter = LeagueFilter {
            limit: 2,
            ..Default::default()
        };

        assert_eq!(ids(&filter.apply(&all)), vec![1, 2]);
    }

    #[test]
    fn test_inactive_only() {
        let all = leagues();
        assert_eq!(ids(&LeagueFilter::active(false).apply(&all)), vec![2]);
    }
}
