//! TTL and Expiry Tests

use crate::common::*;
use chronokv::prelude::*;

/// Visible on [write_ts, write_ts + ttl)
#[test]
fn test_expiry_window() {
    let db = create_db();
    db.set_with_ttl(10, "k", "f", "v", 3).unwrap();

    assert_eq!(db.get(9, "k", "f"), None);
    assert_eq!(db.get(10, "k", "f").as_deref(), Some("v"));
    assert_eq!(db.get(12, "k", "f").as_deref(), Some("v"));
    assert_eq!(db.get(13, "k", "f"), None);
    assert_eq!(db.entry_at(13, "k", "f"), None);
}

/// Once a newer TTL entry expires, the older unbounded value shows again
#[test]
fn test_expired_entry_uncovers_older_value() {
    let db = create_db();
    db.set(1, "k", "f", "base").unwrap();
    db.set_with_ttl(5, "k", "f", "temp", 2).unwrap();

    assert_eq!(db.get(4, "k", "f").as_deref(), Some("base"));
    assert_eq!(db.get(6, "k", "f").as_deref(), Some("temp"));
    assert_eq!(db.get(7, "k", "f").as_deref(), Some("base"));
}

/// A newer unbounded write replaces a TTL entry for good
#[test]
fn test_set_after_ttl_is_permanent() {
    let db = create_db();
    db.set_with_ttl(1, "k", "f", "temp", 2).unwrap();
    db.set(2, "k", "f", "perm").unwrap();

    assert_eq!(db.get(1000, "k", "f").as_deref(), Some("perm"));
}

/// Default policy: a zero TTL entry is never visible
#[test]
fn test_zero_ttl_allowed_by_default() {
    let db = create_db();
    db.set_with_ttl(1, "k", "f", "v", 0).unwrap();

    assert_eq!(db.get(1, "k", "f"), None);
    assert_eq!(db.history("k", "f").len(), 1);
}

/// RequirePositive rejects zero/negative TTLs before touching the store
#[test]
fn test_require_positive_ttl() {
    let db = create_strict_ttl_db();

    assert_eq!(
        db.set_with_ttl(1, "k", "f", "v", 0),
        Err(Error::InvalidTtl { ttl: 0 })
    );
    assert_eq!(
        db.set_with_ttl(1, "k", "f", "v", -5),
        Err(Error::InvalidTtl { ttl: -5 })
    );
    assert!(!db.contains_key("k"));

    db.set_with_ttl(1, "k", "f", "v", 1).unwrap();
    assert_eq!(db.get(1, "k", "f").as_deref(), Some("v"));
}

/// t + ttl beyond i64::MAX is an error, not a wrap-around
#[test]
fn test_ttl_overflow() {
    let db = create_db();
    let err = db.set_with_ttl(i64::MAX - 1, "k", "f", "v", 5).unwrap_err();

    assert!(matches!(err, Error::TimestampOverflow { .. }));
    assert!(err.is_invalid_argument());
    assert!(!db.contains_key("k"));
}
