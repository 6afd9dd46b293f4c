//! Host configuration parsed from environment variables.

use forum_client::net::config::ApiConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// Leptos site options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `FORUM_API_BASE_URL`: forum REST API base, default
    ///   `http://localhost:8000/api/v1`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api = parse_api(std::env::var("FORUM_API_BASE_URL").ok().as_deref());
        Ok(Self { port, api })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_api(raw: Option<&str>) -> ApiConfig {
    match raw.map(str::trim) {
        Some(base) if !base.is_empty() => ApiConfig::new(base),
        _ => ApiConfig::default(),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
