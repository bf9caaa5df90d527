use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<AppData> {
    Router::new().route("/leagues/{league_slug}", get(super::league_get_action))
}
