//! Store configuration
//!
//! Two policies decide how the store treats questionable writes, plus a
//! capacity hint. Everything has a default, so an empty TOML document is a
//! valid configuration.
//!
//! ```toml
//! ordering = "trusting"
//! ttl_policy = "require_positive"
//! initial_key_capacity = 1024
//! ```

use crate::error::{Error, Result};
use crate::types::{expiry_after, Timestamp, Ttl};
use serde::{Deserialize, Serialize};

/// How a version log treats a write older than its newest entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOrdering {
    /// Reject the write with `Error::OutOfOrderWrite`
    #[default]
    Strict,
    /// Accept the write; reads on that log fall back to a linear scan
    Trusting,
}

/// How `set_with_ttl` treats a TTL that is zero or negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtlPolicy {
    /// Accept it; the entry expires at or before its own write time
    #[default]
    AllowNonPositive,
    /// Reject it with `Error::InvalidTtl`
    RequirePositive,
}

/// Configuration for a key store
///
/// # Example
///
/// ```rust
/// use chronokv_core::{StoreConfig, WriteOrdering};
///
/// let config = StoreConfig::default()
///     .with_ordering(WriteOrdering::Trusting)
///     .with_initial_key_capacity(64);
/// assert_eq!(config.ordering, WriteOrdering::Trusting);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Out-of-order write handling (default: strict)
    pub ordering: WriteOrdering,
    /// Non-positive TTL handling (default: allow)
    pub ttl_policy: TtlPolicy,
    /// Number of keys to pre-allocate room for (default: 0)
    pub initial_key_capacity: usize,
}

impl StoreConfig {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text
    ///
    /// Missing fields take their default values; unknown fields are an error.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Sets the out-of-order write policy
    pub fn with_ordering(mut self, ordering: WriteOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Sets the TTL policy
    pub fn with_ttl_policy(mut self, ttl_policy: TtlPolicy) -> Self {
        self.ttl_policy = ttl_policy;
        self
    }

    /// Sets the initial key capacity
    pub fn with_initial_key_capacity(mut self, capacity: usize) -> Self {
        self.initial_key_capacity = capacity;
        self
    }

    /// Expiry of a write at `write_ts` with `ttl`, checked against the TTL policy
    pub fn expiry_for(&self, write_ts: Timestamp, ttl: Ttl) -> Result<Timestamp> {
        if ttl <= 0 && self.ttl_policy == TtlPolicy::RequirePositive {
            return Err(Error::InvalidTtl { ttl });
        }
        expiry_after(write_ts, ttl)
    }
}
