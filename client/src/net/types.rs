//! REST DTOs for the `/api/v1` backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Unknown fields in
//! responses (server-assigned ids and the like) are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A selectable course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    /// Human-readable label shown in the course list.
    pub display: String,
}

/// A timestamped note tied to a (course, student) pair.
///
/// Used both as the POST body and as the shape of every returned record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub course_id: String,
    /// Eight-digit student identifier.
    pub uvu_id: String,
    /// Display-formatted timestamp.
    pub date: String,
    pub text: String,
}
