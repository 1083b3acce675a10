//! Point-in-time Visibility Tests

use crate::common::*;

/// The newest write at or before t wins
#[test]
fn test_last_write_wins() {
    let db = create_db();
    db.set(1, "k", "f", "a").unwrap();
    db.set(3, "k", "f", "b").unwrap();
    db.set(7, "k", "f", "c").unwrap();

    assert_eq!(db.get(0, "k", "f"), None);
    assert_eq!(db.get(1, "k", "f").as_deref(), Some("a"));
    assert_eq!(db.get(2, "k", "f").as_deref(), Some("a"));
    assert_eq!(db.get(3, "k", "f").as_deref(), Some("b"));
    assert_eq!(db.get(6, "k", "f").as_deref(), Some("b"));
    assert_eq!(db.get(7, "k", "f").as_deref(), Some("c"));
    assert_eq!(db.get(i64::MAX, "k", "f").as_deref(), Some("c"));
}

/// Two writes at the same timestamp: the later one wins
#[test]
fn test_same_timestamp_later_append_wins() {
    let db = create_db();
    db.set(4, "k", "f", "first").unwrap();
    db.set(4, "k", "f", "second").unwrap();

    assert_eq!(db.get(4, "k", "f").as_deref(), Some("second"));
    assert_eq!(history_stamps(&db, "k", "f"), vec![4, 4]);
}

/// Missing key and missing field are both plain absence
#[test]
fn test_missing_key_and_field() {
    let db = create_db();
    db.set(1, "k", "f", "v").unwrap();

    assert_eq!(db.get(1, "other", "f"), None);
    assert_eq!(db.get(1, "k", "other"), None);
    assert!(db.require(1, "k", "other").unwrap_err().is_not_found());
}

/// Fields of one key are independent
#[test]
fn test_fields_independent() {
    let db = create_db();
    db.set(1, "k", "a", "1").unwrap();
    db.set(5, "k", "b", "2").unwrap();

    assert_eq!(db.get(3, "k", "a").as_deref(), Some("1"));
    assert_eq!(db.get(3, "k", "b"), None);
    assert_eq!(db.field_count("k"), 2);
}

/// Negative timestamps are ordinary logical times
#[test]
fn test_negative_timestamps() {
    let db = create_db();
    db.set(-10, "k", "f", "old").unwrap();
    db.set(0, "k", "f", "new").unwrap();

    assert_eq!(db.get(-11, "k", "f"), None);
    assert_eq!(db.get(-1, "k", "f").as_deref(), Some("old"));
    assert_eq!(db.get(0, "k", "f").as_deref(), Some("new"));
}

/// Values are stored verbatim, including empty strings
#[test]
fn test_empty_value_is_a_value() {
    let db = create_db();
    db.set(1, "k", "f", "").unwrap();

    assert_eq!(db.get(1, "k", "f").as_deref(), Some(""));
    assert_eq!(db.scan(1, "k"), vec!["f="]);
}
