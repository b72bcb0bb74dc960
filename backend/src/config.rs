//! Server configuration.
//!
//! Every setting can come from a command-line flag or an environment
//! variable; flags win. Defaults bind `0.0.0.0:8000` and allow a browser
//! client on `http://localhost:3000`.

use axum::http::HeaderValue;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CORS origin list is empty")]
    NoOrigins,

    #[error("wildcard CORS origin cannot be combined with credentials")]
    WildcardOrigin,

    #[error("invalid CORS origin {origin:?}: expected http(s)://host[:port]")]
    InvalidOrigin { origin: String },

    #[error("CORS origin {origin:?} is not a valid header value")]
    InvalidHeaderValue {
        origin: String,
        #[source]
        source: axum::http::header::InvalidHeaderValue,
    },
}

#[derive(Debug, Clone, Parser)]
#[command(name = "item-tracker")]
#[command(about = "In-memory item CRUD service", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "ITEMS_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "ITEMS_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Origins allowed to make credentialed cross-origin requests
    #[arg(
        long,
        env = "ITEMS_CORS_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_CORS_ORIGIN
    )]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validate the origin allow-list and turn it into header values
    pub fn origin_header_values(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        if self.cors_origins.is_empty() {
            return Err(ConfigError::NoOrigins);
        }

        self.cors_origins
            .iter()
            .map(|origin| parse_origin(origin))
            .collect()
    }

    /// Build the CORS layer: listed origins, credentials allowed, and any
    /// method or header the browser asks for.
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let origins = self.origin_header_values()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()))
    }
}

fn parse_origin(raw: &str) -> Result<HeaderValue, ConfigError> {
    let origin = raw.trim().trim_end_matches('/');

    if origin == "*" {
        return Err(ConfigError::WildcardOrigin);
    }

    let host = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidOrigin {
            origin: raw.to_string(),
        })?;
    if host.is_empty() || host.contains('/') {
        return Err(ConfigError::InvalidOrigin {
            origin: raw.to_string(),
        });
    }

    HeaderValue::from_str(origin).map_err(|source| ConfigError::InvalidHeaderValue {
        origin: raw.to_string(),
        source,
    })
}
