//! Main entry point for chronokv.
//!
//! This module provides the `ChronoKv` struct, which bundles the shared key
//! store with the query engine behind one handle.

use chronokv_core::{
    Error, Result, StoreConfig, Timestamp, Ttl, TtlPolicy, VersionedEntry, WriteOrdering,
};
use chronokv_engine::QueryEngine;
use chronokv_storage::KeyStore;
use std::sync::Arc;

/// The chronokv store.
///
/// Cloning is cheap and clones share the same data, so a `ChronoKv` can be
/// handed to as many threads as needed.
///
/// # Example
///
/// ```
/// use chronokv::prelude::*;
///
/// let db = ChronoKv::new();
/// db.set(1, "acct", "balance", "10")?;
///
/// // Conditional update: only if the balance is still 10
/// assert!(db.compare_and_set_with_ttl(2, "acct", "balance", 10, 20, 100)?);
/// assert_eq!(db.get(2, "acct", "balance").as_deref(), Some("20"));
///
/// // The old value is still there for earlier reads
/// assert_eq!(db.get(1, "acct", "balance").as_deref(), Some("10"));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChronoKv {
    store: Arc<KeyStore>,
    engine: QueryEngine,
}

impl ChronoKv {
    /// Create an empty store with default settings.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        let store = Arc::new(KeyStore::with_config(config));
        Self {
            engine: QueryEngine::new(Arc::clone(&store)),
            store,
        }
    }

    /// Create a builder for store configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use chronokv::prelude::*;
    ///
    /// let db = ChronoKv::builder()
    ///     .ordering(WriteOrdering::Trusting)
    ///     .ttl_policy(TtlPolicy::RequirePositive)
    ///     .build();
    /// assert!(db.set_with_ttl(1, "k", "f", "v", 0).is_err());
    /// ```
    pub fn builder() -> ChronoKvBuilder {
        ChronoKvBuilder::new()
    }

    /// Configuration this store was created with.
    pub fn config(&self) -> &StoreConfig {
        self.store.config()
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Write `value` for `key`/`field` at `t`, never expiring.
    ///
    /// Creates the key and the field on first use.
    pub fn set(
        &self,
        t: Timestamp,
        key: &str,
        field: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        self.store.set(t, key, field, value)
    }

    /// Write `value` at `t`, visible until (not including) `t + ttl`.
    pub fn set_with_ttl(
        &self,
        t: Timestamp,
        key: &str,
        field: &str,
        value: impl Into<String>,
        ttl: Ttl,
    ) -> Result<()> {
        self.store.set_with_ttl(t, key, field, value, ttl)
    }

    /// Delete a field at `t`.
    ///
    /// Returns `true` if a value was visible and is now hidden. Reads before
    /// `t` still see the old value.
    pub fn delete(&self, t: Timestamp, key: &str, field: &str) -> Result<bool> {
        self.store.delete(t, key, field)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Value of `key`/`field` visible at `t`.
    ///
    /// `None` covers every flavour of absence: unknown key or field, nothing
    /// written yet, expired, or deleted.
    pub fn get(&self, t: Timestamp, key: &str, field: &str) -> Option<String> {
        self.store.get(t, key, field)
    }

    /// Like [`get`](Self::get), but absence is an [`Error::NotFound`].
    pub fn require(&self, t: Timestamp, key: &str, field: &str) -> Result<String> {
        self.get(t, key, field).ok_or_else(|| Error::NotFound {
            key: key.to_string(),
            field: field.to_string(),
            at: t,
        })
    }

    /// Entry governing `key`/`field` at `t`, tombstones included.
    pub fn entry_at(&self, t: Timestamp, key: &str, field: &str) -> Option<VersionedEntry> {
        self.store.entry_at(t, key, field)
    }

    /// Every visible field of `key` at `t` as `field=value`, sorted by field.
    pub fn scan(&self, t: Timestamp, key: &str) -> Vec<String> {
        self.engine.scan(t, key)
    }

    /// Like [`scan`](Self::scan), restricted to fields starting with `prefix`.
    pub fn scan_by_prefix(&self, t: Timestamp, key: &str, prefix: &str) -> Vec<String> {
        self.engine.scan_by_prefix(t, key, prefix)
    }

    /// Visible `(field, value)` pairs under `prefix`, sorted by field.
    pub fn scan_entries(&self, t: Timestamp, key: &str, prefix: &str) -> Vec<(String, String)> {
        self.engine.scan_entries(t, key, prefix)
    }

    /// Every entry ever written to `key`/`field`, newest first.
    pub fn history(&self, key: &str, field: &str) -> Vec<VersionedEntry> {
        self.engine.history(key, field)
    }

    // =========================================================================
    // Conditional writes
    // =========================================================================

    /// Re-write the current value at `t` if it equals `expected`.
    ///
    /// The stored value is parsed as an integer. A match appends the same
    /// value again without expiry; see
    /// [`QueryEngine::compare_and_set`] for details.
    pub fn compare_and_set(
        &self,
        t: Timestamp,
        key: &str,
        field: &str,
        expected: i64,
    ) -> Result<bool> {
        self.engine.compare_and_set(t, key, field, expected)
    }

    /// Write `new_value` with a TTL if the current value equals `expected`.
    pub fn compare_and_set_with_ttl(
        &self,
        t: Timestamp,
        key: &str,
        field: &str,
        expected: i64,
        new_value: i64,
        ttl: Ttl,
    ) -> Result<bool> {
        self.engine
            .compare_and_set_with_ttl(t, key, field, expected, new_value, ttl)
    }

    /// Delete the field at `t` if its current value equals `expected`.
    pub fn compare_and_delete(
        &self,
        t: Timestamp,
        key: &str,
        field: &str,
        expected: i64,
    ) -> Result<bool> {
        self.engine.compare_and_delete(t, key, field, expected)
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Check if a key has ever been written.
    pub fn contains_key(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    /// Number of fields ever written under `key`.
    pub fn field_count(&self, key: &str) -> usize {
        self.store.field_count(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        self.store.keys()
    }

    /// Store-wide counters.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            keys: self.store.key_count(),
            versions: self.store.version_count(),
        }
    }
}

impl Default for ChronoKv {
    fn default() -> Self {
        Self::new()
    }
}

/// Store-wide counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Keys ever written
    pub keys: usize,
    /// Entries across every version log, tombstones included
    pub versions: usize,
}

/// Builder for store configuration.
///
/// # Example
///
/// ```
/// use chronokv::ChronoKvBuilder;
///
/// let db = ChronoKvBuilder::from_toml_str("ordering = \"trusting\"")?
///     .initial_key_capacity(1024)
///     .build();
/// # Ok::<(), chronokv::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChronoKvBuilder {
    config: StoreConfig,
}

impl ChronoKvBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a TOML configuration document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(Self {
            config: StoreConfig::from_toml_str(text)?,
        })
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the out-of-order write policy.
    pub fn ordering(mut self, ordering: WriteOrdering) -> Self {
        self.config = self.config.with_ordering(ordering);
        self
    }

    /// Set the TTL policy.
    pub fn ttl_policy(mut self, ttl_policy: TtlPolicy) -> Self {
        self.config = self.config.with_ttl_policy(ttl_policy);
        self
    }

    /// Pre-allocate room for `capacity` keys.
    pub fn initial_key_capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.with_initial_key_capacity(capacity);
        self
    }

    /// Build the store.
    pub fn build(self) -> ChronoKv {
        tracing::debug!(
            ordering = ?self.config.ordering,
            ttl_policy = ?self.config.ttl_policy,
            initial_key_capacity = self.config.initial_key_capacity,
            "building store"
        );
        ChronoKv::with_config(self.config)
    }
}
