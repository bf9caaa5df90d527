use crate::{AppData, ServerConfig, StatsPlatformServer};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use stats_core::{
    league_standings, League, LeagueFilter, LeagueRepository, RepositoryError, RepositoryResult,
    Standing, Team,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Repository double that records how often the list is fetched.
pub struct StubLeagueRepository {
    leagues: Vec<League>,
    teams: Vec<Team>,
    standings: Vec<Standing>,
    fail: bool,
    list_calls: AtomicUsize,
}

impl StubLeagueRepository {
    pub fn with(leagues: Vec<League>) -> Arc<Self> {
        Self::with_tables(leagues, Vec::new(), Vec::new())
    }

    pub fn with_tables(leagues: Vec<League>, teams: Vec<Team>, standings: Vec<Standing>) -> Arc<Self> {
        Arc::new(StubLeagueRepository {
            leagues,
            teams,
            standings,
            fail: false,
            list_calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(StubLeagueRepository {
            leagues: Vec::new(),
            teams: Vec::new(),
            standings: Vec::new(),
            fail: true,
            list_calls: AtomicUsize::new(0),
        })
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> RepositoryResult<()> {
        if self.fail {
            return Err(RepositoryError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }

    fn has_league(&self, league_id: u32) -> bool {
        self.leagues.iter().any(|l| l.id == league_id)
    }
}

#[async_trait]
impl LeagueRepository for StubLeagueRepository {
    async fn leagues(&self, filter: &LeagueFilter) -> RepositoryResult<Vec<League>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(filter.apply(&self.leagues))
    }

    async fn league_by_id(&self, id: u32) -> RepositoryResult<Option<League>> {
        self.check()?;
        Ok(self.leagues.iter().find(|l| l.id == id).cloned())
    }

    async fn teams(&self, league_id: u32) -> RepositoryResult<Option<Vec<Team>>> {
        self.check()?;
        Ok(self.has_league(league_id).then(|| {
            self.teams
                .iter()
                .filter(|t| t.league_id == league_id)
                .cloned()
                .collect()
        }))
    }

    async fn standings(&self, league_id: u32, season: Option<&str>) -> RepositoryResult<Option<Vec<Standing>>> {
        self.check()?;
        Ok(self
            .has_league(league_id)
            .then(|| league_standings(&self.standings, league_id, season)))
    }
}

pub fn router(repository: Arc<StubLeagueRepository>) -> Router {
    StatsPlatformServer::new(AppData::new(repository), ServerConfig::default()).router()
}

pub async fn send(router: Router, request: Request<Body>) -> Response {
    router.oneshot(request).await.unwrap()
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let resp = send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await;

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
