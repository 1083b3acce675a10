//! # chronokv
//!
//! In-memory versioned key/field store.
//!
//! Every write is tagged with a caller-supplied logical timestamp and kept
//! forever in a per-field version log. Reads ask "what was visible at time
//! `t`?", so the full history stays queryable.
//!
//! ## Quick Start
//!
//! ```
//! use chronokv::prelude::*;
//!
//! let db = ChronoKv::new();
//!
//! db.set(1, "user:1", "name", "alice")?;
//! db.set_with_ttl(2, "user:1", "session", "abc", 10)?;
//!
//! assert_eq!(db.get(1, "user:1", "name").as_deref(), Some("alice"));
//! assert_eq!(db.get(12, "user:1", "session"), None); // expired
//! assert_eq!(db.scan(5, "user:1"), vec!["name=alice", "session=abc"]);
//! # Ok::<(), chronokv::Error>(())
//! ```
//!
//! ## Visibility
//!
//! An entry written at `w` with expiry `e` is visible at `t` when
//! `w <= t < e` (no expiry means unbounded). A read returns the newest
//! visible entry; a tombstone hides the field.
//!
//! ## Layers
//!
//! - [`chronokv_core`]: entries, errors, configuration
//! - [`chronokv_storage`]: version logs, field tables, the sharded key map
//! - [`chronokv_engine`]: scans, history and compare-and-* operations

#![warn(missing_docs)]

mod database;

pub mod prelude;

// Re-export main entry points
pub use database::{ChronoKv, ChronoKvBuilder, StoreStats};

// Re-export core types
pub use chronokv_core::{
    Error, Result, StoreConfig, Timestamp, Ttl, TtlPolicy, VersionedEntry, WriteOrdering,
};
