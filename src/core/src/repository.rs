use crate::{League, LeagueFilter, Standing, Team};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("league source unavailable: {0}")]
    Unavailable(String),
    #[error("invalid league data: {0}")]
    InvalidData(String),
    #[error("duplicate league id {0}")]
    DuplicateId(u32),
    #[error("duplicate league slug '{0}'")]
    DuplicateSlug(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only access to leagues. Implementations return leagues in source order.
///
/// `teams` and `standings` return `None` when the league itself is unknown.
#[async_trait]
pub trait LeagueRepository: Send + Sync {
    async fn leagues(&self, filter: &LeagueFilter) -> RepositoryResult<Vec<League>>;

    async fn league_by_id(&self, id: u32) -> RepositoryResult<Option<League>>;

    async fn league_by_slug(&self, slug: &str) -> RepositoryResult<Option<League>> {
        let leagues = self.leagues(&LeagueFilter::default()).await?;
        Ok(leagues.into_iter().find(|league| league.slug == slug))
    }

    async fn teams(&self, league_id: u32) -> RepositoryResult<Option<Vec<Team>>>;

    /// Ordered by rank.
    async fn standings(&self, league_id: u32, season: Option<&str>) -> RepositoryResult<Option<Vec<Standing>>>;
}
