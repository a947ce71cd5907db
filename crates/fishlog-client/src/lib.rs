//! # fishlog-client
//!
//! The catch log session: the [`CatchLog`](state::CatchLog) state machine,
//! derived views, persistence sequencing through [`Tracker`](tracker::Tracker),
//! configuration, and the terminal front end.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod image;
pub mod present;
pub mod state;
pub mod tracker;
pub mod views;

use tracing_subscriber::{fmt, EnvFilter};

pub use error::{ClientError, Result};
pub use state::{CatchLog, SubmitOutcome};
pub use tracker::Tracker;

/// Install the global tracing subscriber (respects `RUST_LOG`). Logs go to
/// stderr so command output stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("fishlog=info,fishlog_client=info,fishlog_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
