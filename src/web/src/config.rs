use axum::http::HeaderValue;
use database::{RemoteLeagueRepository, StaticLeagueRepository};
use stats_core::{LeagueRepository, RepositoryResult};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 18000;
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("LEAGUES_SOURCE=file requires LEAGUES_FILE")]
    MissingLeaguesFile,
    #[error("unknown LEAGUES_SOURCE '{0}', expected embedded, file or api")]
    UnknownSource(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeagueSourceConfig {
    Embedded,
    File(PathBuf),
    Api { base_url: String, timeout: Duration },
}

impl LeagueSourceConfig {
    pub fn build(&self) -> RepositoryResult<Arc<dyn LeagueRepository>> {
        let repository: Arc<dyn LeagueRepository> = match self {
            LeagueSourceConfig::Embedded => Arc::new(StaticLeagueRepository::embedded()?),
            LeagueSourceConfig::File(path) => Arc::new(StaticLeagueRepository::from_path(path)?),
            LeagueSourceConfig::Api { base_url, timeout } => {
                Arc::new(RemoteLeagueRepository::new(base_url, *timeout)?)
            }
        };

        Ok(repository)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub league_source: LeagueSourceConfig,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            league_source: LeagueSourceConfig::Embedded,
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS).unwrap_or_default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let host = match lookup("HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidValue { key: "HOST", value })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value })?,
            None => defaults.port,
        };

        let source = lookup("LEAGUES_SOURCE").map(|value| value.to_lowercase());

        let league_source = match source.as_deref() {
            None | Some("embedded") => LeagueSourceConfig::Embedded,
            Some("file") => LeagueSourceConfig::File(
                lookup("LEAGUES_FILE")
                    .map(PathBuf::from)
                    .ok_or(ConfigError::MissingLeaguesFile)?,
            ),
            Some("api") => {
                let timeout = match lookup("REQUEST_TIMEOUT_SECS") {
                    Some(value) => value
                        .parse::<u64>()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or(ConfigError::InvalidValue {
                            key: "REQUEST_TIMEOUT_SECS",
                            value,
                        })?,
                    None => DEFAULT_REQUEST_TIMEOUT_SECS,
                };

                LeagueSourceConfig::Api {
                    base_url: lookup("LEAGUES_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                    timeout: Duration::from_secs(timeout),
                }
            }
            Some(other) => return Err(ConfigError::UnknownSource(other.to_string())),
        };

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(value) => parse_origins(&value).ok_or(ConfigError::InvalidValue {
                key: "ALLOWED_ORIGINS",
                value,
            })?,
            None => defaults.allowed_origins,
        };

        Ok(ServerConfig {
            host,
            port,
            league_source,
            allowed_origins,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_origins(value: &str) -> Option<Vec<HeaderValue>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| HeaderValue::from_str(origin).ok())
        .collect()
}
