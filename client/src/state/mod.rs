//! Client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `logs` holds the course/log controller, `logs_view` projects it into
//! render-ready data, and `ui` holds the theme.

pub mod logs;
pub mod logs_view;
pub mod ui;
