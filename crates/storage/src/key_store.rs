//! Key store: the top-level map of keys to field tables
//!
//! DashMap of keys, one RwLock per FieldTable.
//! Sharded key lookups, per-key exclusive writes.
//!
//! # Design
//!
//! - DashMap: 16-way sharded by default, key lookups only lock one shard briefly
//! - Arc<RwLock<FieldTable>>: the shard guard is dropped before the table
//!   lock is taken, so a slow key never blocks its shard neighbours
//! - Per-key: operations on different keys never contend
//!
//! # Atomicity
//!
//! [`KeyStore::write`] and [`KeyStore::write_existing`] hold the key's
//! write lock for the whole closure, so read-then-append sequences (the
//! compare-and-* family) are atomic with respect to every other operation
//! on that key.

use crate::field_table::FieldTable;
use chronokv_core::{
    Error, Result, StoreConfig, Timestamp, Ttl, VersionedEntry, WriteOrdering,
};
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Write access to one key while its exclusive lock is held
///
/// Handed to the closure passed to [`KeyStore::write`]. Appends go through
/// [`KeyWriter::append`], which applies the store's ordering policy.
pub struct KeyWriter<'a> {
    key: &'a str,
    table: &'a mut FieldTable,
    ordering: WriteOrdering,
}

impl<'a> KeyWriter<'a> {
    /// Key this writer is bound to
    pub fn key(&self) -> &str {
        self.key
    }

    /// Read-only view of the key's fields
    pub fn table(&self) -> &FieldTable {
        &*self.table
    }

    /// Value visible at `t` for a field, `None` if absent or deleted
    pub fn visible_value(&self, t: Timestamp, field: &str) -> Option<&str> {
        self.table.visible_value(t, field)
    }

    /// Append an entry to a field's log
    ///
    /// Under [`WriteOrdering::Strict`] an entry older than the log's tail is
    /// rejected with [`Error::OutOfOrderWrite`] and nothing is appended.
    /// Under [`WriteOrdering::Trusting`] it is appended anyway.
    pub fn append(&mut self, field: &str, entry: VersionedEntry) -> Result<()> {
        let log = self.table.log_mut_or_insert(field);

        if let Some(last_ts) = log.last_write_ts() {
            if entry.write_ts < last_ts {
                match self.ordering {
                    WriteOrdering::Strict => {
                        tracing::debug!(
                            key = self.key,
                            field,
                            write_ts = entry.write_ts,
                            last_ts,
                            "rejecting out-of-order write"
                        );
                        return Err(Error::OutOfOrderWrite {
                            key: self.key.to_string(),
                            field: field.to_string(),
                            write_ts: entry.write_ts,
                            last_ts,
                        });
                    }
                    WriteOrdering::Trusting => {
                        tracing::warn!(
                            key = self.key,
                            field,
                            write_ts = entry.write_ts,
                            last_ts,
                            "accepting out-of-order write, reads fall back to linear scan"
                        );
                    }
                }
            }
        }

        log.append(entry);
        Ok(())
    }
}

/// Versioned key store
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - get(): read lock on the key's table only
/// - set(): write lock on the key's table only
/// - Different keys never contend
///
/// # Example
///
/// ```
/// use chronokv_storage::KeyStore;
///
/// let store = KeyStore::new();
/// store.set(1, "user:1", "name", "alice").unwrap();
/// assert_eq!(store.get(1, "user:1", "name").as_deref(), Some("alice"));
/// assert_eq!(store.get(0, "user:1", "name"), None);
/// ```
pub struct KeyStore {
    tables: DashMap<String, Arc<RwLock<FieldTable>>>,
    config: StoreConfig,
}

impl KeyStore {
    /// Create an empty store with default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            tables: DashMap::with_capacity(config.initial_key_capacity),
            config,
        }
    }

    /// Configuration this store was created with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of keys ever written
    pub fn key_count(&self) -> usize {
        self.tables.len()
    }

    /// Check if a key has been written
    pub fn contains_key(&self, key: &str) -> bool {
        self.tables.contains_key(key)
    }

    /// Number of fields under a key (0 if the key does not exist)
    pub fn field_count(&self, key: &str) -> usize {
        self.read(key, FieldTable::len).unwrap_or(0)
    }

    /// Total entries across all keys and fields
    pub fn version_count(&self) -> usize {
        self.tables
            .iter()
            .map(|entry| entry.value().read().version_count())
            .sum()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.tables.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        keys
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Write a value that never expires
    ///
    /// Creates the key and field on first use. Fails only when the ordering
    /// policy rejects the write.
    pub fn set(
        &self,
        t: Timestamp,
        key: &str,
        field: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        let entry = VersionedEntry::live(t, value);
        self.write(key, |writer| writer.append(field, entry))
    }

    /// Write a value visible for `t <= now < t + ttl`
    ///
    /// The TTL is validated before the key is created, so a rejected TTL
    /// leaves the store untouched.
    pub fn set_with_ttl(
        &self,
        t: Timestamp,
        key: &str,
        field: &str,
        value: impl Into<String>,
        ttl: Ttl,
    ) -> Result<()> {
        let expiry = self.config.expiry_for(t, ttl)?;
        let entry = VersionedEntry::expiring(t, value, expiry);
        self.write(key, |writer| writer.append(field, entry))
    }

    /// Record a delete for a field
    ///
    /// Appends a tombstone only if a value is visible at `t`; returns whether
    /// it did. Missing keys and fields are left alone.
    pub fn delete(&self, t: Timestamp, key: &str, field: &str) -> Result<bool> {
        self.write_existing(key, |writer| {
            if writer.visible_value(t, field).is_none() {
                return Ok(false);
            }
            writer.append(field, VersionedEntry::tombstone(t))?;
            Ok(true)
        })
        .unwrap_or(Ok(false))
    }

    /// Run `f` with exclusive access to a key, creating the key if needed
    pub fn write<R>(&self, key: &str, f: impl FnOnce(&mut KeyWriter<'_>) -> R) -> R {
        let table = self.table_or_insert(key);
        let mut guard = table.write();
        let mut writer = KeyWriter {
            key,
            table: &mut *guard,
            ordering: self.config.ordering,
        };
        f(&mut writer)
    }

    /// Run `f` with exclusive access to an existing key
    ///
    /// Returns `None` without calling `f` if the key was never written.
    pub fn write_existing<R>(
        &self,
        key: &str,
        f: impl FnOnce(&mut KeyWriter<'_>) -> R,
    ) -> Option<R> {
        let table = self.table(key)?;
        let mut guard = table.write();
        let mut writer = KeyWriter {
            key,
            table: &mut *guard,
            ordering: self.config.ordering,
        };
        Some(f(&mut writer))
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Value visible at `t`
    ///
    /// `None` if the key or field does not exist, nothing is visible at `t`,
    /// or the visible entry is a tombstone.
    pub fn get(&self, t: Timestamp, key: &str, field: &str) -> Option<String> {
        self.read(key, |table| table.visible_value(t, field).map(str::to_string))
            .flatten()
    }

    /// Entry visible at `t`, tombstones included
    pub fn entry_at(&self, t: Timestamp, key: &str, field: &str) -> Option<VersionedEntry> {
        self.read(key, |table| table.value_at(t, field).cloned())
            .flatten()
    }

    /// Run `f` with shared access to a key
    ///
    /// Returns `None` if the key was never written.
    pub fn read<R>(&self, key: &str, f: impl FnOnce(&FieldTable) -> R) -> Option<R> {
        let table = self.table(key)?;
        let guard = table.read();
        Some(f(&guard))
    }

    fn table(&self, key: &str) -> Option<Arc<RwLock<FieldTable>>> {
        self.tables.get(key).map(|entry| Arc::clone(entry.value()))
    }

    fn table_or_insert(&self, key: &str) -> Arc<RwLock<FieldTable>> {
        if let Some(table) = self.table(key) {
            return table;
        }
        let entry = self.tables.entry(key.to_string()).or_insert_with(|| {
            tracing::debug!(key, "creating key");
            Arc::new(RwLock::new(FieldTable::new()))
        });
        Arc::clone(entry.value())
    }
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStore")
            .field("key_count", &self.key_count())
            .field("version_count", &self.version_count())
            .field("config", &self.config)
            .finish()
    }
}
