//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `API_UPSTREAM_URL` is set but is not an http(s) URL.
    #[error("invalid API_UPSTREAM_URL: {0}")]
    InvalidUpstream(String),

    /// `API_UPSTREAM_TIMEOUT_SECS` is set but is not a positive integer.
    #[error("invalid API_UPSTREAM_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the REST backend `/api/v1` requests are forwarded to.
    pub upstream_url: Option<String>,
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: backend base URL; `/api/v1` answers 502 when absent
    /// - `API_UPSTREAM_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            upstream_url: parse_upstream(std::env::var("API_UPSTREAM_URL").ok().as_deref())?,
            upstream_timeout_secs: parse_timeout(std::env::var("API_UPSTREAM_TIMEOUT_SECS").ok().as_deref())?,
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_upstream(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidUpstream(value.to_owned()));
    }
    Ok(Some(value.trim_end_matches('/').to_owned()))
}

fn parse_timeout(raw: Option<&str>) -> Result<u64, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        Some(value) => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::InvalidTimeout(value.to_owned())),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
