//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the `/api/v1` pass-through and the
//! configured backend base URL.

use std::time::Duration;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; `reqwest::Client` is an `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend base URL without trailing slash.
    pub upstream: Option<String>,
}

impl AppState {
    /// Build state from host config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self { http, upstream: config.upstream_url.clone() })
    }
}
