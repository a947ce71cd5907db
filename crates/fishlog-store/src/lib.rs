//! # fishlog-store
//!
//! Durable storage for the catch log. The log is kept as one JSON value in a
//! small key-value table inside a SQLite file; the [`KeyValueStore`] trait
//! abstracts the medium so sessions and tests can swap in [`MemoryStore`].
//! [`LogPersistence`] layers the load/save contract on top.

pub mod database;
pub mod kv;
pub mod persistence;

mod error;

pub use database::Database;
pub use error::{Result, StoreError};
pub use kv::{KeyValueStore, MemoryStore};
pub use persistence::{LogPersistence, SaveOutcome};
