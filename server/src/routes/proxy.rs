//! `/api/v1` pass-through to the configured REST backend.
//!
//! The page calls the backend with relative URLs, so the host forwards those
//! requests unchanged: method, path, query string, `content-type`, `accept`
//! and body go upstream; status, `content-type` and body come back.

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// No `API_UPSTREAM_URL` was configured.
    #[error("no API upstream configured")]
    NotConfigured,

    /// The backend did not answer within the configured timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// The backend could not be reached or its response could not be relayed.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Join the backend base URL with the incoming path and query.
pub(crate) fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{base}{path_and_query}")
}

/// Forward one request to the backend and relay its response.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let base = state.upstream.as_deref().ok_or(ProxyError::NotConfigured)?;
    let url = upstream_url(base, &uri);

    let mut request = state.http.request(method.clone(), &url);
    for name in [header::CONTENT_TYPE, header::ACCEPT] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(error = %e, %method, %url, "upstream request failed");
        ProxyError::from(e)
    })?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %url, status = status.as_u16(), "proxied api request");

    let mut response = Response::builder().status(status);
    if let Some(value) = content_type {
        response = response.header(header::CONTENT_TYPE, value);
    }
    response
        .body(Body::from(bytes))
        .map_err(|e| ProxyError::Upstream(e.to_string()))
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
