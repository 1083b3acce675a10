//! Query layer for chronokv
//!
//! [`QueryEngine`] is a stateless facade over a shared [`KeyStore`]:
//! - Scans: every visible field of a key, optionally filtered by prefix
//! - Compare-and-set / compare-and-delete against an integer expectation
//! - History: every entry ever written to a field
//!
//! [`KeyStore`]: chronokv_storage::KeyStore

#![warn(missing_docs)]
#![warn(clippy::all)]

mod conditional;
mod query;

pub use query::{format_pair, QueryEngine};
