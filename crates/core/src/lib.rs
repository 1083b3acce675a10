//! Core types for chronokv
//!
//! This crate defines the fundamental types shared by every layer:
//! - [`VersionedEntry`]: one write in a version log
//! - [`Timestamp`] / [`Ttl`]: caller-supplied logical time
//! - [`Error`]: the error taxonomy (not found, condition failed, invalid argument)
//! - [`StoreConfig`]: ordering and TTL policies

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;
pub mod value;

pub use config::{StoreConfig, TtlPolicy, WriteOrdering};
pub use error::{Error, Result};
pub use types::{Timestamp, Ttl, VersionedEntry};
