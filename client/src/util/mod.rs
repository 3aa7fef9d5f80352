//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and small pure rules
//! from page and component logic to improve reuse and testability.

pub mod log_date;
pub mod student_id;
pub mod theme;
