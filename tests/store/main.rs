//! Store Integration Tests
//!
//! Exercises the public `ChronoKv` API end to end: point-in-time reads,
//! expiry, tombstones, compare-and-*, scans and concurrency.

#[path = "../common/mod.rs"]
mod common;

mod expiry;
mod properties;
mod scan;
mod scenarios;
mod visibility;
