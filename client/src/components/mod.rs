//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the memoized `LogsView` projection and forward user
//! events to `LogsState` transitions read from Leptos context.

pub mod course_select;
pub mod log_form;
pub mod log_list;
pub mod student_id_input;
pub mod theme_toggle;
