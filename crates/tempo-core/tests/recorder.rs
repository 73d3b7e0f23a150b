//! Recorder unit tests: ordering, end-without-start, serialization shapes.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tempo_core::{Recorder, TempoError};

#[test]
fn serializes_in_first_start_order() {
    let mut rec = Recorder::new();
    rec.start("total", Some("Total"));
    rec.start("auth", None);
    rec.start("db", None);
    rec.end("db").unwrap();
    rec.end("auth").unwrap();

    let names: Vec<&str> = rec.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["total", "auth", "db"]);

    let value = rec.header_value();
    let auth_pos = value.find("auth").unwrap();
    let db_pos = value.find("db").unwrap();
    assert!(value.starts_with("total"));
    assert!(auth_pos < db_pos);
}

#[test]
fn end_without_start_fails_and_does_not_mutate() {
    let mut rec = Recorder::new();
    rec.start("total", Some("Total"));

    let err = rec.end("snausages").expect_err("must fail");
    assert!(matches!(err, TempoError::EntryNotFound(_)));
    assert_eq!(err.to_string(), "'snausages' entry not found");
    assert_eq!(err.status(), 500);

    // The failed end must not have created the entry.
    assert_eq!(rec.entries().len(), 1);
    assert_eq!(rec.entries()[0].name, "total");
}

#[test]
fn immediate_end_yields_nonnegative_duration() {
    let mut rec = Recorder::new();
    rec.start("op", Some("Operation"));
    let entry = rec.end("op").unwrap();
    let dur = entry.duration.unwrap();
    assert!(dur >= 0.0);

    let value = rec.header_value();
    assert!(value.starts_with("op;dur="));
    assert!(value.ends_with(";desc=\"Operation\""));
}

#[test]
fn restart_keeps_position_and_clears_duration() {
    let mut rec = Recorder::new();
    rec.start("a", None);
    rec.start("b", Some("first"));
    rec.start("c", None);
    rec.end("b").unwrap();
    assert!(rec.entries()[1].duration.is_some());

    // Restart: position preserved, description refreshed, duration cleared.
    rec.start("b", Some("second"));
    let names: Vec<&str> = rec.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(rec.entries()[1].description.as_deref(), Some("second"));
    assert!(rec.entries()[1].duration.is_none());
}

#[test]
fn unended_entry_serializes_without_dur() {
    let mut rec = Recorder::new();
    rec.start("miss", None);
    rec.start("region", Some("us-east-1"));

    assert_eq!(rec.header_value(), "miss,region;desc=\"us-east-1\"");
}

#[test]
fn serialize_is_read_only() {
    let mut rec = Recorder::new();
    rec.start("x", Some("X"));
    rec.end("x").unwrap();

    let first = rec.header_value();
    let second = rec.header_value();
    assert_eq!(first, second);
    assert_eq!(rec.entries().len(), 1);
}

#[test]
fn empty_recorder_serializes_to_empty_string() {
    let rec = Recorder::new();
    assert_eq!(rec.header_value(), "");
}

#[test]
fn duration_has_submillisecond_precision() {
    let mut rec = Recorder::new();
    rec.start("fast", None);
    std::thread::sleep(std::time::Duration::from_micros(300));
    let dur = rec.end("fast").unwrap().duration.unwrap();
    // Sub-millisecond sleep must not round down to zero.
    assert!(dur > 0.0);
    assert!(dur < 1_000.0);
}
