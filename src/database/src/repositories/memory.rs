use crate::loaders::{DatabaseEntity, DatabaseLoader};
use async_trait::async_trait;
use log::info;
use stats_core::{
    league_standings, League, LeagueFilter, LeagueRepository, RepositoryResult, Standing, Team,
};
use std::path::Path;

/// Leagues, teams and standings held in memory, loaded once at startup.
pub struct StaticLeagueRepository {
    leagues: Vec<League>,
    teams: Vec<Team>,
    standings: Vec<Standing>,
}

impl StaticLeagueRepository {
    pub fn new(leagues: Vec<League>) -> Self {
        StaticLeagueRepository {
            leagues,
            teams: Vec::new(),
            standings: Vec::new(),
        }
    }

    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    pub fn with_standings(mut self, standings: Vec<Standing>) -> Self {
        self.standings = standings;
        self
    }

    pub fn embedded() -> RepositoryResult<Self> {
        let repository = Self::from(DatabaseLoader::load()?);

        info!(
            "loaded {} embedded leagues, {} teams, {} standings",
            repository.leagues.len(),
            repository.teams.len(),
            repository.standings.len()
        );

        Ok(repository)
    }

    pub fn from_path(path: &Path) -> RepositoryResult<Self> {
        let repository = Self::from(DatabaseLoader::load_from_path(path)?);

        info!(
            "loaded {} leagues, {} teams, {} standings from {}",
            repository.leagues.len(),
            repository.teams.len(),
            repository.standings.len(),
            path.display()
        );

        Ok(repository)
    }

    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }

    fn has_league(&self, league_id: u32) -> bool {
        self.leagues.iter().any(|league| league.id == league_id)
    }
}

impl From<DatabaseEntity> for StaticLeagueRepository {
    fn from(database: DatabaseEntity) -> Self {
        StaticLeagueRepository::new(database.leagues.into_iter().map(League::from).collect())
            .with_teams(database.teams.into_iter().map(Team::from).collect())
            .with_standings(database.standings.into_iter().map(Standing::from).collect())
    }
}

#[async_trait]
impl LeagueRepository for StaticLeagueRepository {
    async fn leagues(&self, filter: &LeagueFilter) -> RepositoryResult<Vec<League>> {
        Ok(filter.apply(&self.leagues))
    }

    async fn league_by_id(&self, id: u32) -> RepositoryResult<Option<League>> {
        Ok(self.leagues.iter().find(|league| league.id == id).cloned())
    }

    async fn league_by_slug(&self, slug: &str) -> RepositoryResult<Option<League>> {
        Ok(self.leagues.iter().find(|league| league.slug == slug).cloned())
    }

    async fn teams(&self, league_id: u32) -> RepositoryResult<Option<Vec<Team>>> {
        if !self.has_league(league_id) {
            return Ok(None);
        }

        Ok(Some(
            self.teams
                .iter()
                .filter(|team| team.league_id == league_id)
                .cloned()
                .collect(),
        ))
    }

    async fn standings(&self, league_id: u32, season: Option<&str>) -> RepositoryResult<Option<Vec<Standing>>> {
        if !self.has_league(league_id) {
            return Ok(None);
        }

        Ok(Some(league_standings(&self.standings, league_id, season)))
    }
}
