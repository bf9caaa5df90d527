pub mod get;

use crate::AppData;
use axum::Router;

pub fn league_routes() -> Router<AppData> {
    Router::new().merge(get::routes::routes())
}
