//! Scan Tests

use crate::common::*;

/// Scan output is sorted by field name regardless of insertion order
#[test]
fn test_scan_sorted() {
    let db = create_db();
    for field in ["zeta", "alpha", "mid", "beta"] {
        db.set(1, "k", field, field.len().to_string()).unwrap();
    }

    assert_eq!(
        db.scan(1, "k"),
        vec!["alpha=5", "beta=4", "mid=3", "zeta=4"]
    );
}

/// Fields not yet written, expired or deleted at t are skipped
#[test]
fn test_scan_point_in_time() {
    let db = create_db();
    db.set(1, "k", "a", "1").unwrap();
    db.set_with_ttl(1, "k", "b", "2", 2).unwrap();
    db.set(2, "k", "c", "3").unwrap();
    db.delete(3, "k", "a").unwrap();

    assert_eq!(db.scan(0, "k"), Vec::<String>::new());
    assert_eq!(db.scan(1, "k"), vec!["a=1", "b=2"]);
    assert_eq!(db.scan(2, "k"), vec!["a=1", "b=2", "c=3"]);
    assert_eq!(db.scan(3, "k"), vec!["c=3"]);
}

/// Prefix filtering is a plain starts_with on the field name
#[test]
fn test_scan_by_prefix() {
    let db = create_db();
    db.set(1, "k", "user:1", "a").unwrap();
    db.set(1, "k", "user:2", "b").unwrap();
    db.set(1, "k", "users", "c").unwrap();
    db.set(1, "k", "admin", "d").unwrap();

    assert_eq!(
        db.scan_by_prefix(1, "k", "user:"),
        vec!["user:1=a", "user:2=b"]
    );
    assert_eq!(db.scan_by_prefix(1, "k", "user").len(), 3);
    assert_eq!(db.scan_by_prefix(1, "k", "").len(), 4);
    assert!(db.scan_by_prefix(1, "k", "nobody").is_empty());
}

/// Scanning a key that was never written is empty, not an error
#[test]
fn test_scan_missing_key() {
    let db = create_db();
    assert!(db.scan(1, "ghost").is_empty());
    assert!(db.scan_entries(1, "ghost", "").is_empty());
}

/// Structured entries agree with the rendered form
#[test]
fn test_scan_entries_match_scan() {
    let db = create_db();
    db.set(1, "k", "b", "x=y").unwrap();
    db.set(1, "k", "a", "1").unwrap();

    let rendered: Vec<String> = db
        .scan_entries(1, "k", "")
        .into_iter()
        .map(|(f, v)| format!("{}={}", f, v))
        .collect();
    assert_eq!(rendered, db.scan(1, "k"));
    assert_eq!(rendered, vec!["a=1", "b=x=y"]);
}
