//! Session state: the store a CLI session operates on.

use chronokv::{ChronoKv, Error, StoreConfig, VersionedEntry};

use crate::parse::StoreCommand;

/// Result of one command, before formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Write accepted
    Ok,
    /// Point read: `None` when nothing is visible
    Value(Option<String>),
    /// `del`: whether a value was visible and got hidden
    Deleted(bool),
    /// Compare-and-* outcome
    Applied(bool),
    /// Visible `(field, value)` pairs, sorted by field
    Pairs(Vec<(String, String)>),
    /// Version log, newest first
    History(Vec<VersionedEntry>),
    /// Store counters and configuration
    Info(StoreInfo),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StoreInfo {
    pub keys: usize,
    pub versions: usize,
    pub config: StoreConfig,
}

pub struct SessionState {
    db: ChronoKv,
}

impl SessionState {
    pub fn new(db: ChronoKv) -> Self {
        Self { db }
    }

    /// Run one command against the session store.
    pub fn execute(&mut self, cmd: StoreCommand) -> Result<Output, Error> {
        tracing::debug!(?cmd, "executing");
        let output = match cmd {
            StoreCommand::Set { t, key, field, value } => {
                self.db.set(t, &key, &field, value)?;
                Output::Ok
            }
            StoreCommand::SetTtl { t, key, field, value, ttl } => {
                self.db.set_with_ttl(t, &key, &field, value, ttl)?;
                Output::Ok
            }
            StoreCommand::Get { t, key, field } => Output::Value(self.db.get(t, &key, &field)),
            StoreCommand::Delete { t, key, field } => {
                Output::Deleted(self.db.delete(t, &key, &field)?)
            }
            StoreCommand::Cas { t, key, field, expected } => {
                Output::Applied(self.db.compare_and_set(t, &key, &field, expected)?)
            }
            StoreCommand::CasTtl { t, key, field, expected, new_value, ttl } => Output::Applied(
                self.db
                    .compare_and_set_with_ttl(t, &key, &field, expected, new_value, ttl)?,
            ),
            StoreCommand::Cad { t, key, field, expected } => {
                Output::Applied(self.db.compare_and_delete(t, &key, &field, expected)?)
            }
            StoreCommand::Scan { t, key } => Output::Pairs(self.db.scan_entries(t, &key, "")),
            StoreCommand::ScanPrefix { t, key, prefix } => {
                Output::Pairs(self.db.scan_entries(t, &key, &prefix))
            }
            StoreCommand::History { key, field } => Output::History(self.db.history(&key, &field)),
            StoreCommand::Info => {
                let stats = self.db.stats();
                Output::Info(StoreInfo {
                    keys: stats.keys,
                    versions: stats.versions,
                    config: self.db.config().clone(),
                })
            }
        };
        Ok(output)
    }

    /// Like [`execute`](Self::execute), but a failed compare-and-* is an error.
    ///
    /// Shell mode uses this so the exit status reflects the outcome.
    pub fn execute_strict(&mut self, cmd: StoreCommand) -> Result<Output, Error> {
        let target = match &cmd {
            StoreCommand::Cas { key, field, .. }
            | StoreCommand::CasTtl { key, field, .. }
            | StoreCommand::Cad { key, field, .. } => Some((key.clone(), field.clone())),
            _ => None,
        };

        match (self.execute(cmd)?, target) {
            (Output::Applied(false), Some((key, field))) => {
                Err(Error::ConditionFailed { key, field })
            }
            (output, _) => Ok(output),
        }
    }
}
