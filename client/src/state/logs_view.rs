//! Pure projection from controller state to what the page shows.
//!
//! Components render a `LogsView` and never inspect `LogsState` flags
//! directly, so visibility, heading text, placeholders and button enablement
//! are all decided (and tested) here.

#[cfg(test)]
#[path = "logs_view_test.rs"]
mod logs_view_test;

use super::logs::{FetchFailure, LogsState};

/// Label of the leading "nothing selected" course option.
pub const COURSE_SENTINEL: &str = "Choose Courses";
pub const NO_LOGS_TEXT: &str = "No logs found for this student in this course.";
pub const SERVER_ERROR_HEADING: &str = "Error fetching logs. Please try again.";
pub const SERVER_ERROR_TEXT: &str = "Unable to load logs";
pub const CONNECTION_ERROR_HEADING: &str = "Error connecting to server.";
pub const CONNECTION_ERROR_TEXT: &str = "Connection error";
/// Alert shown when saving a log fails.
pub const SUBMIT_FAILED_ALERT: &str = "Error connecting to server. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogItemView {
    pub index: usize,
    pub date: String,
    pub text: String,
    pub body_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderKind {
    Empty,
    Error,
}

/// Single muted list item shown instead of entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogsView {
    pub course_options: Vec<CourseOption>,
    pub show_student_id: bool,
    pub student_id: String,
    pub show_logs: bool,
    pub heading: String,
    pub entries: Vec<LogItemView>,
    pub placeholder: Option<Placeholder>,
    pub add_log_enabled: bool,
    pub draft: String,
}

pub fn project(state: &LogsState) -> LogsView {
    let selected = state.selected_course.as_deref();

    let mut course_options = Vec::with_capacity(state.courses.len() + 1);
    course_options.push(CourseOption {
        value: String::new(),
        label: COURSE_SENTINEL.to_owned(),
        selected: selected.is_none(),
    });
    course_options.extend(state.courses.iter().map(|c| CourseOption {
        value: c.id.clone(),
        label: c.display.clone(),
        selected: selected == Some(c.id.as_str()),
    }));

    let (heading, placeholder) = match state.fetch_error {
        Some(FetchFailure::Server) => (
            SERVER_ERROR_HEADING.to_owned(),
            Some(Placeholder { kind: PlaceholderKind::Error, text: SERVER_ERROR_TEXT }),
        ),
        Some(FetchFailure::Connection) => (
            CONNECTION_ERROR_HEADING.to_owned(),
            Some(Placeholder { kind: PlaceholderKind::Error, text: CONNECTION_ERROR_TEXT }),
        ),
        None => (
            format!("Student Logs for {}", state.shown_student_id),
            state
                .logs
                .is_empty()
                .then_some(Placeholder { kind: PlaceholderKind::Empty, text: NO_LOGS_TEXT }),
        ),
    };

    let entries = state
        .logs
        .iter()
        .enumerate()
        .map(|(index, log)| LogItemView {
            index,
            date: log.entry.date.clone(),
            text: log.entry.text.clone(),
            body_visible: log.expanded,
        })
        .collect();

    LogsView {
        course_options,
        show_student_id: selected.is_some(),
        student_id: state.student_id.clone(),
        show_logs: selected.is_some() && state.logs_visible,
        heading,
        entries,
        placeholder,
        add_log_enabled: state.can_submit(),
        draft: state.draft.clone(),
    }
}
