use crate::api::api_routes;
use crate::common::default_handler::default_handler;
use crate::home::home_routes;
use crate::leagues::league_routes;
use crate::AppData;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create(allowed_origins: &[HeaderValue]) -> Router<AppData> {
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
            .allow_methods([Method::GET])
            .allow_headers(Any);

        Router::<AppData>::new()
            .merge(home_routes())
            .merge(league_routes())
            .merge(api_routes().layer(cors))
            .fallback(default_handler)
    }
}
