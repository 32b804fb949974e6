//! Server configuration read from the environment.

use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite:app.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid HOST {0:?}: expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT {0:?}: expected a number between 0 and 65535")]
    InvalidPort(String),
    #[error("invalid CORS_ORIGIN {0:?}")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// sqlx SQLite URL, from `DB_URI`
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Allowed origin for CORS; any origin when unset
    pub cors_origin: Option<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    /// Load `DB_URI`, `HOST`, `PORT` and `CORS_ORIGIN`, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DB_URI").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host_raw = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let cors_origin = match lookup("CORS_ORIGIN") {
            Some(raw) => Some(
                raw.parse::<HeaderValue>()
                    .map_err(|_| ConfigError::InvalidCorsOrigin(raw))?,
            ),
            None => None,
        };

        Ok(Self {
            database_url,
            host,
            port,
            cors_origin,
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
