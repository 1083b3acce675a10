//! Storage layer for chronokv
//!
//! This crate implements the in-memory version history:
//! - VersionLog: append-only, timestamp-ordered entries for one key/field
//! - FieldTable: field name → VersionLog for one key
//! - KeyStore: DashMap of keys, one RwLock per FieldTable
//! - KeyWriter: write access to one key under its exclusive lock

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field_table;
pub mod key_store;
pub mod version_log;

pub use field_table::FieldTable;
pub use key_store::{KeyStore, KeyWriter};
pub use version_log::VersionLog;
