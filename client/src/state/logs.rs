//! Course/log controller state.
//!
//! DESIGN
//! ======
//! All course, identifier and log rules live here as plain transitions on
//! `LogsState`; pages only dispatch events and run the returned requests.
//! Each fetch and submit carries the `generation` current when it started.
//! Selecting a course or editing the identifier bumps the generation, so
//! a response that arrives after the user moved on is dropped instead of
//! overwriting newer state.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use crate::net::api::ApiError;
use crate::net::types::{Course, LogEntry};
use crate::util::{log_date, student_id};

/// Why the last logs fetch failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchFailure {
    /// The backend answered with an error.
    Server,
    /// No response arrived.
    Connection,
}

impl From<&ApiError> for FetchFailure {
    fn from(err: &ApiError) -> Self {
        if err.is_transport() { Self::Connection } else { Self::Server }
    }
}

/// A log entry as shown in the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayedLog {
    pub entry: LogEntry,
    /// Whether the body text is visible. Clicking the entry flips it.
    pub expanded: bool,
}

impl From<LogEntry> for DisplayedLog {
    fn from(entry: LogEntry) -> Self {
        Self { entry, expanded: true }
    }
}

/// A logs fetch the page should run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub course_id: String,
    pub student_id: String,
}

/// A log creation the page should run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub generation: u64,
    pub entry: LogEntry,
}

/// Result of feeding a submit response back into the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved and prepended to the visible list.
    Added,
    /// Saved, but the list now belongs to another selection.
    Stale,
    /// Not saved; the draft is kept.
    Failed(ApiError),
}

/// Controller state for the course/log form.
#[derive(Clone, Debug, Default)]
pub struct LogsState {
    pub courses: Vec<Course>,
    pub selected_course: Option<String>,
    /// Sanitized identifier, 0 to 8 digits.
    pub student_id: String,
    /// Student the visible logs belong to.
    pub shown_student_id: String,
    pub logs: Vec<DisplayedLog>,
    pub logs_visible: bool,
    pub logs_loaded: bool,
    pub fetch_error: Option<FetchFailure>,
    pub draft: String,
    pub generation: u64,
    /// Bumped whenever the identifier input should take focus.
    pub focus_student_id_seq: u64,
}

impl LogsState {
    pub fn set_courses(&mut self, courses: Vec<Course>) {
        self.courses = courses;
    }

    /// Handle a change of the course list. An empty value is the sentinel.
    pub fn select_course(&mut self, selection: &str) {
        self.generation += 1;
        self.student_id.clear();
        if selection.is_empty() {
            self.selected_course = None;
        } else {
            self.selected_course = Some(selection.to_owned());
            self.focus_student_id_seq += 1;
        }
        self.logs.clear();
        self.logs_visible = false;
        self.logs_loaded = false;
        self.fetch_error = None;
    }

    /// Sanitize raw identifier input and decide whether to fetch.
    ///
    /// Returns a request only for a complete identifier with a course chosen.
    pub fn input_student_id(&mut self, raw: &str) -> Option<FetchRequest> {
        self.generation += 1;
        self.student_id = student_id::sanitize(raw);

        match &self.selected_course {
            Some(course_id) if student_id::is_complete(&self.student_id) => {
                // A different identifier must not keep the previous student's list.
                if self.student_id != self.shown_student_id {
                    self.logs.clear();
                    self.logs_visible = false;
                    self.logs_loaded = false;
                    self.fetch_error = None;
                }
                Some(FetchRequest {
                    generation: self.generation,
                    course_id: course_id.clone(),
                    student_id: self.student_id.clone(),
                })
            }
            _ => {
                self.logs_visible = false;
                self.logs_loaded = false;
                None
            }
        }
    }

    /// Apply a logs response. Returns `false` when the response was stale.
    pub fn apply_fetch(&mut self, request: &FetchRequest, result: Result<Vec<LogEntry>, ApiError>) -> bool {
        if request.generation != self.generation {
            return false;
        }

        self.shown_student_id.clone_from(&request.student_id);
        self.logs_visible = true;
        match result {
            Ok(mut entries) => {
                log_date::sort_newest_first(&mut entries);
                self.logs = entries.into_iter().map(DisplayedLog::from).collect();
                self.fetch_error = None;
                self.logs_loaded = true;
            }
            Err(err) => {
                self.logs.clear();
                self.fetch_error = Some(FetchFailure::from(&err));
                self.logs_loaded = false;
            }
        }
        true
    }

    pub fn set_draft(&mut self, text: &str) {
        text.clone_into(&mut self.draft);
    }

    /// The add-log action is enabled only with logs loaded and a non-blank draft.
    pub fn can_submit(&self) -> bool {
        self.logs_loaded && !self.draft.trim().is_empty()
    }

    /// Build the submission for the current draft, stamped with `date`.
    ///
    /// Returns `None` (nothing to do) when the action is disabled.
    pub fn begin_submit(&self, date: String) -> Option<SubmitRequest> {
        if !self.can_submit() {
            return None;
        }
        let course_id = self.selected_course.clone()?;
        Some(SubmitRequest {
            generation: self.generation,
            entry: LogEntry {
                course_id,
                uvu_id: self.student_id.clone(),
                date,
                text: self.draft.trim().to_owned(),
            },
        })
    }

    /// Apply a submit response.
    pub fn apply_submit(&mut self, request: &SubmitRequest, result: Result<LogEntry, ApiError>) -> SubmitOutcome {
        match result {
            Ok(saved) => {
                self.draft.clear();
                if request.generation != self.generation {
                    return SubmitOutcome::Stale;
                }
                self.logs.insert(0, DisplayedLog::from(saved));
                SubmitOutcome::Added
            }
            Err(err) => SubmitOutcome::Failed(err),
        }
    }

    /// Show or hide the body of the entry at `index`.
    pub fn toggle_entry(&mut self, index: usize) {
        if let Some(log) = self.logs.get_mut(index) {
            log.expanded = !log.expanded;
        }
    }
}
