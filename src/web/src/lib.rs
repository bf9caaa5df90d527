mod api;
mod common;
mod config;
mod error;
mod home;
mod leagues;
mod routes;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, LeagueSourceConfig, ServerConfig};
pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use axum::Router;
use log::{error, info};
use stats_core::LeagueRepository;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct StatsPlatformServer {
    data: AppData,
    config: ServerConfig,
}

impl StatsPlatformServer {
    pub fn new(data: AppData, config: ServerConfig) -> Self {
        StatsPlatformServer { data, config }
    }

    pub fn router(&self) -> Router {
        ServerRoutes::create(&self.config.allowed_origins)
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone())
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let app = self.router();

        let addr = self.config.addr();

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://{}", addr);

        axum::serve(listener, app).await.inspect_err(|e| {
            error!("Server error: {}", e);
        })
    }
}

pub struct AppData {
    pub leagues: Arc<dyn LeagueRepository>,
}

impl AppData {
    pub fn new(leagues: Arc<dyn LeagueRepository>) -> Self {
        AppData { leagues }
    }
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            leagues: Arc::clone(&self.leagues),
        }
    }
}
