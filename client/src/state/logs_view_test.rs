use super::*;
use crate::net::api::ApiError;
use crate::net::types::{Course, LogEntry};

fn entry(date: &str, text: &str) -> LogEntry {
    LogEntry {
        course_id: "cs4690".to_owned(),
        uvu_id: "10234567".to_owned(),
        date: date.to_owned(),
        text: text.to_owned(),
    }
}

fn with_courses() -> LogsState {
    let mut state = LogsState::default();
    state.set_courses(vec![
        Course { id: "cs4690".to_owned(), display: "CS 4690".to_owned() },
        Course { id: "cs3380".to_owned(), display: "CS 3380".to_owned() },
    ]);
    state
}

fn fetched(result: Result<Vec<LogEntry>, ApiError>) -> LogsState {
    let mut state = with_courses();
    state.select_course("cs4690");
    let req = state.input_student_id("10234567").unwrap();
    state.apply_fetch(&req, result);
    state
}

#[test]
fn course_options_start_with_selected_sentinel() {
    let view = project(&with_courses());
    let labels: Vec<&str> = view.course_options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, [COURSE_SENTINEL, "CS 4690", "CS 3380"]);
    assert_eq!(view.course_options[0].value, "");
    assert!(view.course_options[0].selected);
    assert!(!view.show_student_id);
    assert!(!view.show_logs);
}

#[test]
fn sentinel_present_even_without_courses() {
    let view = project(&LogsState::default());
    assert_eq!(view.course_options.len(), 1);
    assert_eq!(view.course_options[0].label, COURSE_SENTINEL);
}

#[test]
fn selecting_course_marks_option_and_shows_identifier() {
    let mut state = with_courses();
    state.select_course("cs3380");
    let view = project(&state);
    assert!(view.show_student_id);
    assert!(!view.course_options[0].selected);
    assert!(view.course_options[2].selected);
    assert!(!view.show_logs);
}

#[test]
fn loaded_logs_show_heading_and_entries() {
    let view = project(&fetched(Ok(vec![
        entry("1/1/2026, 9:00:00 AM", "older"),
        entry("1/2/2026, 9:00:00 AM", "newer"),
    ])));
    assert!(view.show_logs);
    assert_eq!(view.heading, "Student Logs for 10234567");
    assert_eq!(view.placeholder, None);
    assert_eq!(view.entries.len(), 2);
    assert_eq!(view.entries[0].text, "newer");
    assert_eq!(view.entries[0].index, 0);
    assert!(view.entries[0].body_visible);
}

#[test]
fn empty_result_shows_no_logs_placeholder() {
    let view = project(&fetched(Ok(vec![])));
    assert!(view.show_logs);
    assert_eq!(view.placeholder, Some(Placeholder { kind: PlaceholderKind::Empty, text: NO_LOGS_TEXT }));
}

#[test]
fn server_error_shows_server_texts() {
    let view = project(&fetched(Err(ApiError::Server { status: 503 })));
    assert!(view.show_logs);
    assert_eq!(view.heading, SERVER_ERROR_HEADING);
    assert_eq!(view.placeholder, Some(Placeholder { kind: PlaceholderKind::Error, text: SERVER_ERROR_TEXT }));
    assert!(view.entries.is_empty());
    assert!(!view.add_log_enabled);
}

#[test]
fn transport_error_shows_connection_texts() {
    let view = project(&fetched(Err(ApiError::Transport("offline".to_owned()))));
    assert_eq!(view.heading, CONNECTION_ERROR_HEADING);
    assert_eq!(
        view.placeholder,
        Some(Placeholder { kind: PlaceholderKind::Error, text: CONNECTION_ERROR_TEXT })
    );
}

#[test]
fn add_log_enabled_tracks_loaded_and_draft() {
    let mut state = fetched(Ok(vec![]));
    assert!(!project(&state).add_log_enabled);
    state.set_draft("note");
    assert!(project(&state).add_log_enabled);
    state.set_draft("  ");
    assert!(!project(&state).add_log_enabled);
}

#[test]
fn submit_into_empty_list_removes_placeholder() {
    let mut state = fetched(Ok(vec![]));
    state.set_draft("first");
    let req = state.begin_submit("1/2/2026, 9:00:00 AM".to_owned()).unwrap();
    state.apply_submit(&req, Ok(req.entry.clone()));

    let view = project(&state);
    assert_eq!(view.placeholder, None);
    assert_eq!(view.entries[0].text, "first");
    assert_eq!(view.draft, "");
}

#[test]
fn collapsed_entry_hides_body() {
    let mut state = fetched(Ok(vec![entry("1/2/2026, 9:00:00 AM", "a")]));
    state.toggle_entry(0);
    assert!(!project(&state).entries[0].body_visible);
}

#[test]
fn clearing_course_hides_identifier_and_logs() {
    let mut state = fetched(Ok(vec![entry("1/2/2026, 9:00:00 AM", "a")]));
    state.select_course("");
    let view = project(&state);
    assert!(!view.show_student_id);
    assert!(!view.show_logs);
    assert!(view.entries.is_empty());
}
