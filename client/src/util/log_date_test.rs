use super::*;
use chrono::Timelike;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
}

fn entry(date: &str, text: &str) -> LogEntry {
    LogEntry {
        course_id: "cs4690".to_owned(),
        uvu_id: "10234567".to_owned(),
        date: date.to_owned(),
        text: text.to_owned(),
    }
}

#[test]
fn format_display_matches_en_us_locale_string() {
    assert_eq!(format_display(at(2026, 10, 19, 15, 4, 5)), "10/19/2026, 3:04:05 PM");
    assert_eq!(format_display(at(2026, 1, 2, 0, 30, 0)), "1/2/2026, 12:30:00 AM");
}

#[test]
fn parse_reads_back_display_format() {
    assert_eq!(parse("10/19/2026, 3:04:05 PM"), Some(at(2026, 10, 19, 15, 4, 5)));
    assert_eq!(parse("1/2/2026, 12:30:00 AM"), Some(at(2026, 1, 2, 0, 30, 0)));
}

#[test]
fn parse_accepts_narrow_no_break_space_before_meridiem() {
    assert_eq!(parse("10/19/2026, 3:04:05\u{202f}PM"), Some(at(2026, 10, 19, 15, 4, 5)));
}

#[test]
fn parse_accepts_iso_forms() {
    assert_eq!(parse("2026-01-02 03:04:05"), Some(at(2026, 1, 2, 3, 4, 5)));
    assert_eq!(parse("2026-01-02T03:04:05.250"), Some(at(2026, 1, 2, 3, 4, 5).with_nanosecond(250_000_000).unwrap()));
    assert_eq!(parse("2026-01-02"), Some(at(2026, 1, 2, 0, 0, 0)));
}

#[test]
fn parse_reads_offset_timestamps_as_local_time() {
    let utc = DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z").unwrap();
    assert_eq!(parse("2026-01-02T03:04:05Z"), Some(utc.with_timezone(&Local).naive_local()));
}

#[test]
fn sort_newest_first_compares_offset_timestamps_by_instant() {
    let mut entries = vec![
        // 05:00 UTC
        entry("2026-01-01T10:00:00+05:00", "older"),
        // 06:00 UTC
        entry("2026-01-01T06:00:00Z", "newer"),
    ];
    sort_newest_first(&mut entries);
    let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, ["newer", "older"]);
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(parse("yesterday"), None);
    assert_eq!(parse(""), None);
}

#[test]
fn now_display_round_trips_through_parse() {
    assert!(parse(&now_display()).is_some());
}

#[test]
fn sort_newest_first_orders_mixed_formats() {
    let mut entries = vec![
        entry("1/2/2026, 9:00:00 AM", "middle"),
        entry("2026-03-01T08:00:00Z", "newest"),
        entry("12/31/2025, 11:59:59 PM", "oldest"),
    ];
    sort_newest_first(&mut entries);
    let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, ["newest", "middle", "oldest"]);
}

#[test]
fn sort_newest_first_puts_unparseable_last_in_original_order() {
    let mut entries = vec![
        entry("not a date", "first-bad"),
        entry("1/2/2026, 9:00:00 AM", "dated"),
        entry("", "second-bad"),
    ];
    sort_newest_first(&mut entries);
    let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, ["dated", "first-bad", "second-bad"]);
}
