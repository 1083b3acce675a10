//! Scans and history
//!
//! Scan output is sorted by field name and only contains fields whose
//! visible entry at `t` carries a value: fields that were never visible,
//! have expired, or are tombstoned are skipped.

use chronokv_core::{Timestamp, VersionedEntry};
use chronokv_storage::KeyStore;
use std::sync::Arc;

/// Stateless query operations over a shared key store
///
/// Cloning is cheap; clones share the same store.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    pub(crate) store: Arc<KeyStore>,
}

/// Render one scan result as `field=value`
pub fn format_pair(field: &str, value: &str) -> String {
    format!("{}={}", field, value)
}

impl QueryEngine {
    /// Create an engine over `store`
    pub fn new(store: Arc<KeyStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<KeyStore> {
        &self.store
    }

    /// Visible `(field, value)` pairs of a key at `t`, sorted by field
    ///
    /// Only fields starting with `prefix` are considered; pass `""` for all.
    /// A missing key yields an empty vector.
    pub fn scan_entries(&self, t: Timestamp, key: &str, prefix: &str) -> Vec<(String, String)> {
        self.store
            .read(key, |table| {
                let mut results: Vec<_> = table
                    .iter()
                    .filter(|(field, _)| field.starts_with(prefix))
                    .filter_map(|(field, log)| {
                        log.visible_value(t)
                            .map(|value| (field.to_string(), value.to_string()))
                    })
                    .collect();

                // Field names are unique, so an unstable sort is deterministic
                results.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
                results
            })
            .unwrap_or_default()
    }

    /// Every visible field of a key at `t`, as `field=value`, sorted by field
    pub fn scan(&self, t: Timestamp, key: &str) -> Vec<String> {
        self.scan_by_prefix(t, key, "")
    }

    /// Like [`scan`](Self::scan), restricted to fields starting with `prefix`
    pub fn scan_by_prefix(&self, t: Timestamp, key: &str, prefix: &str) -> Vec<String> {
        self.scan_entries(t, key, prefix)
            .into_iter()
            .map(|(field, value)| format_pair(&field, &value))
            .collect()
    }

    /// Every entry written to a field, newest first
    ///
    /// Tombstones and expired entries are included. Empty if the key or
    /// field was never written.
    pub fn history(&self, key: &str, field: &str) -> Vec<VersionedEntry> {
        self.store
            .read(key, |table| {
                table
                    .log(field)
                    .map(|log| log.iter().rev().cloned().collect::<Vec<_>>())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }
}
