use super::*;

#[test]
fn course_deserializes_from_backend_shape() {
    let raw = r#"[{"id":"cs4690","display":"CS 4690 - Web Programming"}]"#;
    let courses: Vec<Course> = serde_json::from_str(raw).unwrap();
    assert_eq!(
        courses,
        vec![Course { id: "cs4690".to_owned(), display: "CS 4690 - Web Programming".to_owned() }]
    );
}

#[test]
fn log_entry_serializes_camel_case_keys() {
    let entry = LogEntry {
        course_id: "cs4690".to_owned(),
        uvu_id: "10234567".to_owned(),
        date: "1/2/2026, 9:00:00 AM".to_owned(),
        text: "Asked about project 2".to_owned(),
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["courseId"], "cs4690");
    assert_eq!(value["uvuId"], "10234567");
    assert_eq!(value["date"], "1/2/2026, 9:00:00 AM");
    assert_eq!(value["text"], "Asked about project 2");
    assert_eq!(value.as_object().unwrap().len(), 4);
}

#[test]
fn log_entry_ignores_server_assigned_fields() {
    let raw = r#"{"id":"a1b2","courseId":"cs4690","uvuId":"10234567","date":"1/2/2026, 9:00:00 AM","text":"hi"}"#;
    let entry: LogEntry = serde_json::from_str(raw).unwrap();
    assert_eq!(entry.course_id, "cs4690");
    assert_eq!(entry.text, "hi");
}

#[test]
fn log_entry_requires_text() {
    let raw = r#"{"courseId":"cs4690","uvuId":"10234567","date":"1/2/2026, 9:00:00 AM"}"#;
    assert!(serde_json::from_str::<LogEntry>(raw).is_err());
}
