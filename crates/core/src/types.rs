//! Core types for the versioned store
//!
//! This module defines the types every layer agrees on:
//! - [`Timestamp`]: logical time supplied by the caller
//! - [`Ttl`]: duration added to a write timestamp to compute its expiry
//! - [`VersionedEntry`]: a single write (or tombstone) in a version log

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Logical timestamp supplied by the caller
///
/// The store never reads a wall clock. Timestamps only order writes and
/// select the version visible to a read.
pub type Timestamp = i64;

/// Time-to-live, in the same logical units as [`Timestamp`]
pub type Ttl = i64;

/// One entry in a version log
///
/// An entry is visible at time `t` when `write_ts <= t < expiry`.
/// A `None` value is a tombstone: the entry is visible, but it hides
/// any older value instead of exposing one.
///
/// # Examples
///
/// ```
/// use chronokv_core::VersionedEntry;
///
/// let entry = VersionedEntry::expiring(1, "10", 6);
/// assert!(entry.is_visible_at(5));
/// assert!(!entry.is_visible_at(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedEntry {
    /// Logical time of the write
    pub write_ts: Timestamp,
    /// Stored value, `None` for a tombstone
    pub value: Option<String>,
    /// Exclusive upper bound of visibility, `None` for unbounded
    pub expiry: Option<Timestamp>,
}

impl VersionedEntry {
    /// Create an entry that never expires
    pub fn live(write_ts: Timestamp, value: impl Into<String>) -> Self {
        Self {
            write_ts,
            value: Some(value.into()),
            expiry: None,
        }
    }

    /// Create an entry that stops being visible at `expiry`
    pub fn expiring(write_ts: Timestamp, value: impl Into<String>, expiry: Timestamp) -> Self {
        Self {
            write_ts,
            value: Some(value.into()),
            expiry: Some(expiry),
        }
    }

    /// Create a tombstone that never expires
    pub fn tombstone(write_ts: Timestamp) -> Self {
        Self {
            write_ts,
            value: None,
            expiry: None,
        }
    }

    /// Check whether this entry records a delete
    #[inline]
    pub fn is_tombstone(&self) -> bool {
        self.value.is_none()
    }

    /// Check whether `t` falls before this entry's expiry
    #[inline]
    pub fn is_live_at(&self, t: Timestamp) -> bool {
        self.expiry.map_or(true, |expiry| t < expiry)
    }

    /// Check whether this entry is visible at `t`
    ///
    /// Both bounds: the write time is inclusive, the expiry exclusive.
    #[inline]
    pub fn is_visible_at(&self, t: Timestamp) -> bool {
        self.write_ts <= t && self.is_live_at(t)
    }

    /// Stored value, or `None` for a tombstone
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Compute the expiry of a write made at `write_ts` with the given `ttl`
///
/// Returns [`Error::TimestampOverflow`] if the sum does not fit in a
/// [`Timestamp`]. A non-positive `ttl` yields an expiry at or before
/// `write_ts`; whether that is allowed is decided by the caller's
/// [`TtlPolicy`](crate::TtlPolicy).
pub fn expiry_after(write_ts: Timestamp, ttl: Ttl) -> Result<Timestamp> {
    write_ts
        .checked_add(ttl)
        .ok_or(Error::TimestampOverflow { write_ts, ttl })
}
