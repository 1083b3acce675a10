//! Reference Scenarios
//!
//! The canonical walk-throughs of the store's behaviour, one test each.

use crate::common::*;

/// A write is visible from its own timestamp on, never before
#[test]
fn test_scenario_set_then_get() {
    let db = create_db();
    db.set(1, "k", "f", "10").unwrap();

    assert_eq!(db.get(1, "k", "f").as_deref(), Some("10"));
    assert_eq!(db.get(0, "k", "f"), None);
}

/// Expiry is exclusive: 1 + 5 = 6 is the first instant the value is gone
#[test]
fn test_scenario_ttl_boundary() {
    let db = create_db();
    db.set_with_ttl(1, "k", "f", "10", 5).unwrap();

    assert_eq!(db.get(5, "k", "f").as_deref(), Some("10"));
    assert_eq!(db.get(6, "k", "f"), None);
}

/// Scans list every field as field=value, sorted
#[test]
fn test_scenario_scan() {
    let db = create_db();
    db.set(1, "k", "a", "1").unwrap();
    db.set(1, "k", "b", "2").unwrap();

    assert_eq!(db.scan(1, "k"), vec!["a=1", "b=2"]);
}

/// Compare-and-delete hides the value from then on, history stays readable
#[test]
fn test_scenario_compare_and_delete() {
    let db = create_db();
    db.set(1, "k", "f", "10").unwrap();

    assert!(db.compare_and_delete(2, "k", "f", 10).unwrap());
    assert_eq!(db.get(3, "k", "f"), None);
    assert_eq!(db.get(1, "k", "f").as_deref(), Some("10"));
}

/// Compare-and-set against nothing fails and leaves no trace
#[test]
fn test_scenario_cas_on_absent_value() {
    let db = create_db();

    assert!(!db.compare_and_set_with_ttl(3, "k", "f", 10, 20, 5).unwrap());
    assert!(db.history("k", "f").is_empty());
    assert_eq!(db.stats().versions, 0);
}
