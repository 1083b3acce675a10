//! Error types for chronokv
//!
//! Absence is not an error: reads return `Option`/empty results and the
//! compare-and-* family returns `Ok(false)` on a mismatch. The variants
//! below cover the cases where a caller asked for an error instead
//! ([`Error::NotFound`], [`Error::ConditionFailed`]) and malformed input
//! (the invalid-argument family).

use crate::types::{Timestamp, Ttl};
use thiserror::Error;

/// All chronokv errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No value is visible for the key/field at the requested time
    #[error("not found: {key}/{field} at {at}")]
    NotFound {
        /// Key that was read
        key: String,
        /// Field that was read
        field: String,
        /// Logical time of the read
        at: Timestamp,
    },

    /// A compare-and-* operation found a different (or no) current value
    #[error("condition failed: {key}/{field}")]
    ConditionFailed {
        /// Key that was compared
        key: String,
        /// Field that was compared
        field: String,
    },

    /// TTL rejected by the configured policy
    #[error("invalid ttl {ttl}: must be positive")]
    InvalidTtl {
        /// The rejected TTL
        ttl: Ttl,
    },

    /// Stored value cannot be compared numerically
    #[error("value {value:?} of {key}/{field} is not an integer")]
    NonNumericValue {
        /// Key holding the value
        key: String,
        /// Field holding the value
        field: String,
        /// The stored value
        value: String,
    },

    /// Write older than the tail of its version log
    #[error("out-of-order write to {key}/{field}: {write_ts} < last write {last_ts}")]
    OutOfOrderWrite {
        /// Key being written
        key: String,
        /// Field being written
        field: String,
        /// Timestamp of the rejected write
        write_ts: Timestamp,
        /// Timestamp of the newest entry in the log
        last_ts: Timestamp,
    },

    /// `write_ts + ttl` does not fit in a timestamp
    #[error("timestamp overflow: {write_ts} + {ttl}")]
    TimestampOverflow {
        /// Write timestamp
        write_ts: Timestamp,
        /// TTL added to it
        ttl: Ttl,
    },

    /// Configuration could not be parsed
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for chronokv operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is a failed compare-and-* condition.
    pub fn is_condition_failed(&self) -> bool {
        matches!(self, Error::ConditionFailed { .. })
    }

    /// Check if the caller supplied a malformed argument.
    ///
    /// Covers TTLs, non-numeric comparisons, out-of-order writes and
    /// timestamp overflow.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidTtl { .. }
                | Error::NonNumericValue { .. }
                | Error::OutOfOrderWrite { .. }
                | Error::TimestampOverflow { .. }
        )
    }

    /// Check if retrying with fresh input may succeed.
    pub fn is_retryable(&self) -> bool {
        self.is_condition_failed()
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
