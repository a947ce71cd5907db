//! # fishlog-shared
//!
//! Data model shared by the fishlog crates: catch records, the form draft,
//! fixed constants and the log error taxonomy.

pub mod constants;
pub mod draft;
pub mod error;
pub mod types;

pub use draft::{Draft, DraftField};
pub use error::LogError;
pub use types::{default_time_of_day, normalize_name, CatchRecord, TimeOfDay};
