use serde::{Deserialize, Serialize};

/// One team's row in a league table for a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub id: u32,
    pub league_id: u32,
    pub team_id: u32,
    pub season: String,
    pub rank: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub goal_difference: i32,
    #[serde(default)]
    pub games_played: u32,
}

impl Standing {
    pub fn new(id: u32, league_id: u32, team_id: u32, season: impl Into<String>, rank: u32) -> Self {
        Standing {
            id,
            league_id,
            team_id,
            season: season.into(),
            rank,
            wins: 0,
            losses: 0,
            ties: 0,
            points: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            games_played: 0,
        }
    }

    pub fn with_record(mut self, wins: u32, losses: u32, ties: u32, points: u32) -> Self {
        self.wins = wins;
        self.losses = losses;
        self.ties = ties;
        self.points = points;
        self.games_played = wins + losses + ties;
        self
    }
}

/// Standings of one league, optionally limited to a season, ordered by rank.
pub fn league_standings<'a, I>(standings: I, league_id: u32, season: Option<&str>) -> Vec<Standing>
where
    I: IntoIterator<Item = &'a Standing>,
{
    let mut table: Vec<Standing> = standings
        .into_iter()
        .filter(|s| s.league_id == league_id)
        .filter(|s| season.is_none_or(|season| s.season == season))
        .cloned()
        .collect();

    table.sort_by_key(|s| s.rank);
    table
}

/// Most recent season label; labels such as "2023-24" sort chronologically.
pub fn latest_season(standings: &[Standing]) -> Option<&str> {
    standings.iter().map(|s| s.season.as_str()).max()
}
