//! Append-only version history for one key/field pair
//!
//! Entries are kept in insertion order. As long as every append carries a
//! timestamp no smaller than the tail's, the log is sorted by `write_ts` and
//! point-in-time reads binary-search it. A log that accepted an out-of-order
//! append (trusting mode) is marked unordered and falls back to a linear
//! newest-first scan.

use chronokv_core::{Timestamp, VersionedEntry};

/// Version history for one key/field pair
#[derive(Debug, Clone)]
pub struct VersionLog {
    entries: Vec<VersionedEntry>,
    /// False once an append went behind the tail
    ordered: bool,
}

impl VersionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            ordered: true,
        }
    }

    /// Number of entries, tombstones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every entry was appended in timestamp order
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Timestamp of the most recently appended entry
    pub fn last_write_ts(&self) -> Option<Timestamp> {
        self.entries.last().map(|e| e.write_ts)
    }

    /// Append an entry
    ///
    /// Never fails. Ordering policy is enforced by the caller
    /// ([`KeyWriter::append`](crate::KeyWriter::append)); an entry older
    /// than the tail only switches reads to the linear scan.
    pub fn append(&mut self, entry: VersionedEntry) {
        if let Some(last) = self.entries.last() {
            if entry.write_ts < last.write_ts {
                self.ordered = false;
            }
        }
        self.entries.push(entry);
    }

    /// Entry visible at `t`, tombstones included
    ///
    /// Returns the most recently written entry with `write_ts <= t < expiry`.
    /// A newer entry always shadows an older one while it is live; once it
    /// expires, the next older live entry shows through.
    pub fn value_at(&self, t: Timestamp) -> Option<&VersionedEntry> {
        if self.ordered {
            self.value_at_sorted(t)
        } else {
            self.value_at_linear(t)
        }
    }

    /// Value visible at `t`, `None` if absent or deleted
    pub fn visible_value(&self, t: Timestamp) -> Option<&str> {
        self.value_at(t).and_then(VersionedEntry::value)
    }

    /// Entries in append order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &VersionedEntry> + '_ {
        self.entries.iter()
    }

    fn value_at_sorted(&self, t: Timestamp) -> Option<&VersionedEntry> {
        // First index whose write_ts is after t; everything before it is a candidate
        let end = self.entries.partition_point(|e| e.write_ts <= t);
        self.entries[..end].iter().rev().find(|e| e.is_live_at(t))
    }

    fn value_at_linear(&self, t: Timestamp) -> Option<&VersionedEntry> {
        self.entries.iter().rev().find(|e| e.is_visible_at(t))
    }
}

impl Default for VersionLog {
    fn default() -> Self {
        Self::new()
    }
}
