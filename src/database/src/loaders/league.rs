use serde::Deserialize;
use stats_core::League;

pub(crate) const STATIC_LEAGUES_JSON: &str = include_str!("../data/leagues.json");

#[derive(Deserialize)]
pub struct LeagueEntity {
    pub id: u32,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub source_platform: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<LeagueEntity> for League {
    fn from(entity: LeagueEntity) -> Self {
        League {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            logo_url: entity.logo_url,
            source_platform: entity.source_platform,
            source_url: entity.source_url,
            active: entity.active,
        }
    }
}
