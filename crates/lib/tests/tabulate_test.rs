//! # Tabulation Tests
//!
//! Validates the strict parsing of the generation stage's quiz payload into
//! flat rows: row counts, received-key ordering, and the all-or-nothing
//! failure behavior for malformed payloads.

use mcqgen::{tabulate, GenerateError};

#[test]
fn test_tabulates_one_row_per_entry() {
    let payload = r#"{
        "1": {"mcq": "2+2=?", "options": {"a": "3", "b": "4", "c": "5", "d": "6"}, "correct": "b"},
        "2": {"mcq": "3*3=?", "options": {"a": "6", "b": "9"}, "correct": "b"}
    }"#;

    let rows = tabulate(payload).expect("payload should tabulate");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].mcq, "2+2=?");
    assert_eq!(rows[0].choices, "a: 3 | b: 4 | c: 5 | d: 6");
    assert_eq!(rows[0].correct, "b");
    assert_eq!(rows[1].mcq, "3*3=?");
}

/// Rows follow the key order of the payload as received, not numeric or
/// sorted order.
#[test]
fn test_row_order_follows_received_key_order() {
    let payload = r#"{
        "2": {"mcq": "second key first", "options": {"a": "x"}, "correct": "a"},
        "10": {"mcq": "then ten", "options": {"a": "x"}, "correct": "a"},
        "1": {"mcq": "one last", "options": {"a": "x"}, "correct": "a"}
    }"#;

    let rows = tabulate(payload).expect("payload should tabulate");

    let mcqs: Vec<&str> = rows.iter().map(|r| r.mcq.as_str()).collect();
    assert_eq!(mcqs, vec!["second key first", "then ten", "one last"]);
}

/// A missing `correct` on any entry fails the whole tabulation; no partial
/// row list is produced.
#[test]
fn test_missing_correct_fails_whole_tabulation() {
    let payload = r#"{
        "1": {"mcq": "fine", "options": {"a": "x"}, "correct": "a"},
        "2": {"mcq": "broken", "options": {"a": "x"}}
    }"#;

    let err = tabulate(payload).unwrap_err();

    match err {
        GenerateError::SchemaViolation { entry, field } => {
            assert_eq!(entry, "2");
            assert_eq!(field, "correct");
        }
        other => panic!("expected SchemaViolation, got: {other:?}"),
    }
}

#[test]
fn test_empty_options_is_a_schema_violation() {
    let payload = r#"{"1": {"mcq": "q", "options": {}, "correct": "a"}}"#;

    let err = tabulate(payload).unwrap_err();

    assert!(matches!(
        err,
        GenerateError::SchemaViolation { field: "options", .. }
    ));
}

#[test]
fn test_non_json_input_is_a_parse_error() {
    let err = tabulate("Sorry, I could not generate a quiz.").unwrap_err();
    assert!(matches!(err, GenerateError::PayloadParse(_)));
}

/// Valid JSON that is not an object (e.g. an array) is also a parse error.
#[test]
fn test_non_object_payload_is_a_parse_error() {
    let err = tabulate(r#"[{"mcq": "q"}]"#).unwrap_err();
    assert!(matches!(err, GenerateError::PayloadParse(_)));
}
