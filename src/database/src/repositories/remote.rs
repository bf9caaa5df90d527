use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use stats_core::{
    League, LeagueFilter, LeagueRepository, RepositoryError, RepositoryResult, Standing, Team,
};
use std::time::Duration;

/// Leagues fetched from the stats API on every call.
#[derive(Debug, Clone)]
pub struct RemoteLeagueRepository {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteLeagueRepository {
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        Ok(RemoteLeagueRepository {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET that maps 404 to `None`.
    async fn get_optional<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> RepositoryResult<Option<T>> {
        debug!("fetching: {}", url);

        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => resp
                .json()
                .await
                .map(Some)
                .map_err(|e| RepositoryError::InvalidData(e.to_string())),
            status => {
                warn!("request failed: GET {} returned {}", url, status);
                Err(RepositoryError::Unavailable(format!(
                    "GET {} returned {}",
                    url, status
                )))
            }
        }
    }

    fn query(filter: &LeagueFilter) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("skip", filter.skip.to_string()),
            ("limit", filter.limit.to_string()),
        ];

        if let Some(active) = filter.active {
            query.push(("active", active.to_string()));
        }

        query
    }
}

#[async_trait]
impl LeagueRepository for RemoteLeagueRepository {
    async fn leagues(&self, filter: &LeagueFilter) -> RepositoryResult<Vec<League>> {
        let url = format!("{}/leagues", self.base_url);

        debug!("fetching leagues: {}", url);

        let resp = self
            .client
            .get(&url)
            .query(&Self::query(filter))
            .send()
            .await
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        if !resp.status().is_success() {
            warn!("league list request failed: {}", resp.status());
            return Err(RepositoryError::Unavailable(format!(
                "GET {} returned {}",
                url,
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))
    }

    async fn league_by_id(&self, id: u32) -> RepositoryResult<Option<League>> {
        let url = format!("{}/leagues/{}", self.base_url, id);
        self.get_optional(&url, &[]).await
    }

    async fn teams(&self, league_id: u32) -> RepositoryResult<Option<Vec<Team>>> {
        let url = format!("{}/leagues/{}/teams", self.base_url, league_id);
        self.get_optional(&url, &[]).await
    }

    async fn standings(&self, league_id: u32, season: Option<&str>) -> RepositoryResult<Option<Vec<Standing>>> {
        let url = format!("{}/leagues/{}/standings", self.base_url, league_id);

        let query: Vec<(&str, &str)> = season.map(|season| ("season", season)).into_iter().collect();

        self.get_optional(&url, &query).await
    }
}
