use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/api", get(super::api_root_action))
        .route("/health", get(super::health_action))
        .route("/api/leagues", get(super::league_list_action))
        .route("/api/leagues/{league_id}", get(super::league_get_action))
        .route("/api/leagues/{league_id}/teams", get(super::league_teams_action))
        .route("/api/leagues/{league_id}/standings", get(super::league_standings_action))
}
