//! Compare-and-set / compare-and-delete
//!
//! Every operation here reads the value visible at `t` and appends only if
//! it numerically equals `expected`. The read and the append happen under
//! the key's write lock, so two racing callers with the same expectation
//! cannot both succeed.
//!
//! Outcomes:
//! - `Ok(true)`: condition held, entry appended
//! - `Ok(false)`: nothing visible at `t`, or a different number; nothing appended
//! - `Err(_)`: the stored value is not an integer, the TTL was rejected,
//!   or the ordering policy rejected the append

use crate::query::QueryEngine;
use chronokv_core::value::matches_expected;
use chronokv_core::{Result, Timestamp, Ttl, VersionedEntry};
use chronokv_storage::KeyWriter;

impl QueryEngine {
    /// Re-write the current value at `t` if it equals `expected`
    ///
    /// This takes no new value: on a match the unchanged current value is
    /// appended again with no expiry ("touch"). The effect is to refresh the
    /// write time and drop any TTL the current entry had. For an actual
    /// update use [`compare_and_set_with_ttl`](Self::compare_and_set_with_ttl).
    pub fn compare_and_set(
        &self,
        t: Timestamp,
        key: &str,
        field: &str,
        expected: i64,
    ) -> Result<bool> {
        self.conditional(t, key, field, expected, |writer, current| {
            writer.append(field, VersionedEntry::live(t, current))
        })
    }

    /// Write `new_value` with `expiry = t + ttl` if the current value equals `expected`
    ///
    /// The TTL is checked against the store's policy before anything is read.
    pub fn compare_and_set_with_ttl(
        &self,
        t: Timestamp,
        key: &str,
        field: &str,
        expected: i64,
        new_value: i64,
        ttl: Ttl,
    ) -> Result<bool> {
        let expiry = self.store.config().expiry_for(t, ttl)?;
        self.conditional(t, key, field, expected, |writer, _| {
            writer.append(
                field,
                VersionedEntry::expiring(t, new_value.to_string(), expiry),
            )
        })
    }

    /// Append a tombstone at `t` if the current value equals `expected`
    pub fn compare_and_delete(
        &self,
        t: Timestamp,
        key: &str,
        field: &str,
        expected: i64,
    ) -> Result<bool> {
        self.conditional(t, key, field, expected, |writer, _| {
            writer.append(field, VersionedEntry::tombstone(t))
        })
    }

    fn conditional(
        &self,
        t: Timestamp,
        key: &str,
        field: &str,
        expected: i64,
        apply: impl FnOnce(&mut KeyWriter<'_>, String) -> Result<()>,
    ) -> Result<bool> {
        let applied = self
            .store
            .write_existing(key, |writer| -> Result<bool> {
                let current = match writer.visible_value(t, field) {
                    Some(current) => current.to_string(),
                    None => return Ok(false),
                };
                if !matches_expected(key, field, &current, expected)? {
                    return Ok(false);
                }
                apply(writer, current)?;
                Ok(true)
            })
            .unwrap_or(Ok(false))?;

        tracing::debug!(key, field, t, expected, applied, "conditional write");
        Ok(applied)
    }
}
