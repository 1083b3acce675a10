//! Convenient imports for chronokv.
//!
//! ```
//! use chronokv::prelude::*;
//!
//! let db = ChronoKv::new();
//! db.set(1, "key", "field", "value")?;
//! # Ok::<(), Error>(())
//! ```

// Main entry point
pub use crate::database::{ChronoKv, ChronoKvBuilder, StoreStats};

// Error handling
pub use chronokv_core::{Error, Result};

// Core types
pub use chronokv_core::{StoreConfig, Timestamp, Ttl, TtlPolicy, VersionedEntry, WriteOrdering};
