use crate::loaders::{
    LeagueEntity, StandingEntity, TeamEntity, STATIC_LEAGUES_JSON, STATIC_STANDINGS_JSON,
    STATIC_TEAMS_JSON,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use stats_core::{RepositoryError, RepositoryResult};
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Deserialize)]
pub struct DatabaseEntity {
    pub leagues: Vec<LeagueEntity>,
    #[serde(default)]
    pub teams: Vec<TeamEntity>,
    #[serde(default)]
    pub standings: Vec<StandingEntity>,
}

/// A data file holds either a full database or a bare league list.
#[derive(Deserialize)]
#[serde(untagged)]
enum DatabaseFile {
    Full(DatabaseEntity),
    Leagues(Vec<LeagueEntity>),
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> RepositoryResult<DatabaseEntity> {
        let database = DatabaseEntity {
            leagues: Self::parse_json(STATIC_LEAGUES_JSON)?,
            teams: Self::parse_json(STATIC_TEAMS_JSON)?,
            standings: Self::parse_json(STATIC_STANDINGS_JSON)?,
        };

        Self::validate(&database)?;

        Ok(database)
    }

    pub fn load_from_path(path: &Path) -> RepositoryResult<DatabaseEntity> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::Unavailable(format!("cannot read {}: {}", path.display(), e))
        })?;

        Self::parse(&json)
    }

    pub fn parse(json: &str) -> RepositoryResult<DatabaseEntity> {
        let database = match Self::parse_json::<DatabaseFile>(json)? {
            DatabaseFile::Full(database) => database,
            DatabaseFile::Leagues(leagues) => DatabaseEntity {
                leagues,
                teams: Vec::new(),
                standings: Vec::new(),
            },
        };

        Self::validate(&database)?;

        Ok(database)
    }

    fn parse_json<T: DeserializeOwned>(json: &str) -> RepositoryResult<T> {
        serde_json::from_str(json).map_err(|e| RepositoryError::InvalidData(e.to_string()))
    }

    fn validate(database: &DatabaseEntity) -> RepositoryResult<()> {
        let mut ids = HashSet::with_capacity(database.leagues.len());
        let mut slugs = HashSet::with_capacity(database.leagues.len());

        for league in &database.leagues {
            if league.name.trim().is_empty() {
                return Err(RepositoryError::InvalidData(format!(
                    "league {} has an empty name",
                    league.id
                )));
            }

            if league.slug.is_empty() || !is_url_safe(&league.slug) {
                return Err(RepositoryError::InvalidData(format!(
                    "league {} has an invalid slug '{}'",
                    league.id, league.slug
                )));
            }

            if !ids.insert(league.id) {
                return Err(RepositoryError::DuplicateId(league.id));
            }

            if !slugs.insert(league.slug.as_str()) {
                return Err(RepositoryError::DuplicateSlug(league.slug.clone()));
            }
        }

        let mut team_leagues: HashMap<u32, u32> = HashMap::with_capacity(database.teams.len());

        for team in &database.teams {
            if !ids.contains(&team.league_id) {
                return Err(RepositoryError::InvalidData(format!(
                    "team {} references unknown league {}",
                    team.id, team.league_id
                )));
            }

            if team_leagues.insert(team.id, team.league_id).is_some() {
                return Err(RepositoryError::InvalidData(format!("duplicate team id {}", team.id)));
            }
        }

        let mut standing_ids = HashSet::with_capacity(database.standings.len());

        for standing in &database.standings {
            if team_leagues.get(&standing.team_id) != Some(&standing.league_id) {
                return Err(RepositoryError::InvalidData(format!(
                    "standing {} references team {} outside league {}",
                    standing.id, standing.team_id, standing.league_id
                )));
            }

            if !standing_ids.insert(standing.id) {
                return Err(RepositoryError::InvalidData(format!(
                    "duplicate standing id {}",
                    standing.id
                )));
            }
        }

        Ok(())
    }
}

fn is_url_safe(slug: &str) -> bool {
    slug.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
