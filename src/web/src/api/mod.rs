pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use stats_core::{LeagueFilter, DEFAULT_LEAGUE_LIMIT, MAX_LEAGUE_LIMIT};

pub const API_TITLE: &str = "Stats Aggregation API";

pub fn api_routes() -> Router<AppData> {
    routes::routes()
}

#[derive(Deserialize, Default)]
pub struct LeagueListRequest {
    pub active: Option<bool>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl LeagueListRequest {
    pub fn into_filter(self) -> ApiResult<LeagueFilter> {
        let limit = self.limit.unwrap_or(DEFAULT_LEAGUE_LIMIT);

        if !(1..=MAX_LEAGUE_LIMIT).contains(&limit) {
            return Err(ApiError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_LEAGUE_LIMIT
            )));
        }

        Ok(LeagueFilter {
            active: self.active,
            skip: self.skip.unwrap_or(0),
            limit,
        })
    }
}

#[derive(Deserialize)]
pub struct LeagueGetRequest {
    pub league_id: u32,
}

#[derive(Deserialize, Default)]
pub struct LeagueStandingsRequest {
    pub season: Option<String>,
}

fn league_not_found() -> ApiError {
    ApiError::NotFound("League not found".to_string())
}

pub async fn api_root_action() -> impl IntoResponse {
    Json(json!({
        "message": API_TITLE,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

pub async fn health_action() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

pub async fn league_list_action(
    State(state): State<AppData>,
    query: Result<Query<LeagueListRequest>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(request) = query?;

    let filter = request.into_filter()?;
    let leagues = state.leagues.leagues(&filter).await?;

    Ok(Json(leagues))
}

pub async fn league_get_action(
    State(state): State<AppData>,
    path: Result<Path<LeagueGetRequest>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(route_params) = path?;

    let league = state
        .leagues
        .league_by_id(route_params.league_id)
        .await?
        .ok_or_else(league_not_found)?;

    Ok(Json(league))
}

pub async fn league_teams_action(
    State(state): State<AppData>,
    path: Result<Path<LeagueGetRequest>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(route_params) = path?;

    let teams = state
        .leagues
        .teams(route_params.league_id)
        .await?
        .ok_or_else(league_not_found)?;

    Ok(Json(teams))
}

pub async fn league_standings_action(
    State(state): State<AppData>,
    path: Result<Path<LeagueGetRequest>, PathRejection>,
    query: Result<Query<LeagueStandingsRequest>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(route_params) = path?;
    let Query(request) = query?;

    let season = request.season.as_deref().filter(|season| !season.is_empty());

    let standings = state
        .leagues
        .standings(route_params.league_id, season)
        .await?
        .ok_or_else(league_not_found)?;

    Ok(Json(standings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get, router, StubLeagueRepository};
    use axum::http::StatusCode;
    use stats_core::{League, Standing, Team};

    fn repository() -> std::sync::Arc<StubLeagueRepository> {
        StubLeagueRepository::with_tables(
            vec![
                League::new(1, "NBA", "nba").with_logo_url("x.png"),
                League::new(2, "Old Cup", "old-cup").inactive(),
                League::new(3, "NFL", "nfl"),
            ],
            vec![
                Team::new(10, 1, "Celtics", "celtics"),
                Team::new(11, 1, "Knicks", "knicks"),
                Team::new(30, 3, "Chiefs", "chiefs"),
            ],
            vec![
                Standing::new(100, 1, 11, "2024", 2),
                Standing::new(101, 1, 10, "2024", 1),
                Standing::new(102, 1, 10, "2023", 1),
            ],
        )
    }

    fn assert_json_error(body: &str) {
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert!(value["error"].is_string());
    }

    fn slugs(body: &str) -> Vec<String> {
        let leagues: Vec<League> = serde_json::from_str(body).unwrap();
        leagues.into_iter().map(|l| l.slug).collect()
    }

    #[test]
    fn test_filter_defaults() {
        assert_eq!(LeagueListRequest::default().into_filter().unwrap(), LeagueFilter::default());
    }

    #[test]
    fn test_limit_bounds() {
        let request = LeagueListRequest {
            limit: Some(0),
            ..Default::default()
        };
        assert!(matches!(request.into_filter(), Err(ApiError::BadRequest(_))));

        let request = LeagueListRequest {
            limit: Some(101),
            ..Default::default()
        };
        assert!(matches!(request.into_filter(), Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let (status, body) = get(router(repository()), "/api").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(API_TITLE));
        assert!(body.contains("running"));

        let (status, body) = get(router(repository()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"healthy"}"#);
    }

    #[tokio::test]
    async fn test_list_leagues() {
        let (status, body) = get(router(repository()), "/api/leagues").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(slugs(&body), vec!["nba", "old-cup", "nfl"]);
    }

    #[tokio::test]
    async fn test_list_leagues_with_query() {
        let (_, body) = get(router(repository()), "/api/leagues?active=true&skip=1&limit=1").await;
        assert_eq!(slugs(&body), vec!["nfl"]);
    }

    #[tokio::test]
    async fn test_list_leagues_rejects_limit() {
        let (status, _) = get(router(repository()), "/api/leagues?limit=500").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_league() {
        let (status, body) = get(router(repository()), "/api/leagues/1").await;
        let league: League = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(league.logo_url.as_deref(), Some("x.png"));

        let (status, body) = get(router(repository()), "/api/leagues/9").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("League not found"));
    }

    #[tokio::test]
    async fn test_malformed_query_is_json_bad_request() {
        for uri in ["/api/leagues?limit=abc", "/api/leagues?skip=-1", "/api/leagues?active=maybe"] {
            let (status, body) = get(router(repository()), uri).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_json_error(&body);
        }
    }

    #[tokio::test]
    async fn test_malformed_league_id_is_json_bad_request() {
        for uri in ["/api/leagues/abc", "/api/leagues/abc/teams", "/api/leagues/-1/standings"] {
            let (status, body) = get(router(repository()), uri).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_json_error(&body);
        }
    }

    #[tokio::test]
    async fn test_league_teams() {
        let (status, body) = get(router(repository()), "/api/leagues/1/teams").await;
        let teams: Vec<Team> = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(teams.iter().map(|t| t.id).collect::<Vec<_>>(), vec![10, 11]);

        let (_, body) = get(router(repository()), "/api/leagues/2/teams").await;
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_league_teams_unknown_league() {
        let (status, body) = get(router(repository()), "/api/leagues/9/teams").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("League not found"));
    }

    #[tokio::test]
    async fn test_league_standings_ordered_by_rank() {
        let (status, body) = get(router(repository()), "/api/leagues/1/standings?season=2024").await;
        let standings: Vec<Standing> = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(standings.iter().map(|s| s.id).collect::<Vec<_>>(), vec![101, 100]);
    }

    #[tokio::test]
    async fn test_league_standings_all_seasons() {
        let (_, body) = get(router(repository()), "/api/leagues/1/standings").await;
        let standings: Vec<Standing> = serde_json::from_str(&body).unwrap();

        assert_eq!(standings.len(), 3);
    }

    #[tokio::test]
    async fn test_league_standings_unknown_league() {
        let (status, body) = get(router(repository()), "/api/leagues/9/standings").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_json_error(&body);
    }

    #[tokio::test]
    async fn test_source_failure() {
        let (status, _) = get(router(StubLeagueRepository::failing()), "/api/leagues").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
