use serde::Deserialize;
use stats_core::Team;

pub(crate) const STATIC_TEAMS_JSON: &str = include_str!("../data/teams.json");

#[derive(Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub league_id: u32,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl From<TeamEntity> for Team {
    fn from(entity: TeamEntity) -> Self {
        Team {
            id: entity.id,
            league_id: entity.league_id,
            name: entity.name,
            slug: entity.slug,
            abbreviation: entity.abbreviation,
            logo_url: entity.logo_url,
        }
    }
}
