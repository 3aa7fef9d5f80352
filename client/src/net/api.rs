//! REST API helpers for the courses/logs backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers decide the user-facing
//! text; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Course, LogEntry};

/// Base path of the backend, relative to the page origin.
pub const API_BASE: &str = "/api/v1";

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response arrived (network unreachable, request aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Server { status: u16 },

    /// A 2xx response whose body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn courses_endpoint() -> String {
    format!("{API_BASE}/courses")
}

#[cfg(any(test, feature = "hydrate"))]
fn logs_endpoint() -> String {
    format!("{API_BASE}/logs")
}

#[cfg(any(test, feature = "hydrate"))]
fn logs_query<'a>(course_id: &'a str, uvu_id: &'a str) -> [(&'static str, &'a str); 2] {
    [("courseId", course_id), ("uvuId", uvu_id)]
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Server { status }) }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    check_status(resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available on server".to_owned()))
}

/// Fetch the course list from `GET /api/v1/courses`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body is not a course array.
pub async fn fetch_courses() -> Result<Vec<Course>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&courses_endpoint())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        unavailable()
    }
}

/// Fetch the logs for one student in one course from `GET /api/v1/logs`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or
/// the body is not a log array.
pub async fn fetch_logs(course_id: &str, uvu_id: &str) -> Result<Vec<LogEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&logs_endpoint())
            .query(logs_query(course_id, uvu_id))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (course_id, uvu_id);
        unavailable()
    }
}

/// Create a log entry via `POST /api/v1/logs` and return the stored record.
///
/// # Errors
///
/// Returns an [`ApiError`] if the body cannot be encoded, the request fails,
/// the status is not 2xx, or the response is not a log entry.
pub async fn create_log(entry: &LogEntry) -> Result<LogEntry, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&logs_endpoint())
            .json(entry)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entry;
        unavailable()
    }
}
