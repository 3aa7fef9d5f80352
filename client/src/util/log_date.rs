//! Log timestamps: stamping new entries and ordering fetched ones.
//!
//! Entries carry their date as display text, so ordering has to parse it
//! back. The stamp format matches the en-US locale string browsers produce
//! (`10/19/2026, 3:04:05 PM`), and a few ISO-style forms are accepted for
//! records created elsewhere.

#[cfg(test)]
#[path = "log_date_test.rs"]
mod log_date_test;

use std::cmp::Reverse;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::net::types::LogEntry;

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y, %I:%M %p",
    "%m/%d/%Y, %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
];

const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Current local time in display form.
pub fn now_display() -> String {
    format_display(Local::now().naive_local())
}

pub fn format_display(at: NaiveDateTime) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}

/// Parse a display timestamp. Returns `None` when no known form matches.
pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    // Browsers put a narrow no-break space before AM/PM.
    let normalized = raw.trim().replace(['\u{202f}', '\u{a0}'], " ");
    let text = normalized.as_str();

    // Offset timestamps compare by instant, so bring them into local time
    // like the offset-free forms.
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Local).naive_local());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(at);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Sort newest first. Unparseable dates go last, keeping their order.
pub fn sort_newest_first(entries: &mut [LogEntry]) {
    // Stable sort; `None` orders before `Some`, so it lands last under `Reverse`.
    entries.sort_by_key(|entry| Reverse(parse(&entry.date)));
}
