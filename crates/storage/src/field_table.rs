//! Field table: the version logs of one key
//!
//! Each field gets its own [`VersionLog`], created on the first write to
//! that field. Fields are never removed; a delete is a tombstone in the log.

use crate::version_log::VersionLog;
use chronokv_core::{Timestamp, VersionedEntry};
use rustc_hash::FxHashMap;

/// Field name → version log, for one key
///
/// FxHashMap gives O(1) field lookups. Iteration order is unspecified;
/// callers that need ordered output sort by field name.
#[derive(Debug, Default)]
pub struct FieldTable {
    fields: FxHashMap<String, VersionLog>,
}

impl FieldTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            fields: FxHashMap::default(),
        }
    }

    /// Number of fields ever written
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field has been written yet
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check if a field has a log (written at least once)
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Version log of a field
    pub fn log(&self, field: &str) -> Option<&VersionLog> {
        self.fields.get(field)
    }

    /// Version log of a field, created empty if missing
    pub fn log_mut_or_insert(&mut self, field: &str) -> &mut VersionLog {
        self.fields.entry(field.to_string()).or_insert_with(|| {
            tracing::debug!(field, "creating version log");
            VersionLog::new()
        })
    }

    /// Entry visible at `t` for a field, tombstones included
    pub fn value_at(&self, t: Timestamp, field: &str) -> Option<&VersionedEntry> {
        self.log(field).and_then(|log| log.value_at(t))
    }

    /// Value visible at `t` for a field, `None` if absent or deleted
    pub fn visible_value(&self, t: Timestamp, field: &str) -> Option<&str> {
        self.log(field).and_then(|log| log.visible_value(t))
    }

    /// Iterate over (field name, log) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionLog)> + '_ {
        self.fields.iter().map(|(name, log)| (name.as_str(), log))
    }

    /// Total entries across all fields
    pub fn version_count(&self) -> usize {
        self.fields.values().map(VersionLog::len).sum()
    }
}
