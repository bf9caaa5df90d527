use serde::Deserialize;
use stats_core::Standing;

pub(crate) const STATIC_STANDINGS_JSON: &str = include_str!("../data/standings.json");

#[derive(Deserialize)]
pub struct StandingEntity {
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

impl From<StandingEntity> for Standing {
    fn from(entity: StandingEntity) -> Self {
        Standing {
            id: entity.id,
            league_id: entity.league_id,
            team_id: entity.team_id,
            season: entity.season,
            rank: entity.rank,
            wins: entity.wins,
            losses: entity.losses,
            ties: entity.ties,
            points: entity.points,
            goals_for: entity.goals_for,
            goals_against: entity.goals_against,
            goal_difference: entity.goal_difference,
            games_played: entity.games_played,
        }
    }
}
