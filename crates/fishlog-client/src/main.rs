//! # fishlog
//!
//! Terminal front end for the personal catch log.

use clap::Parser;
use fishlog_client::cli::{self, Cli};
use fishlog_client::config::ClientConfig;
use fishlog_client::Tracker;
use fishlog_shared::constants::APP_NAME;
use tracing::info;

fn main() -> anyhow::Result<()> {
    fishlog_client::init_tracing();

    let args = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(db) = &args.db {
        config.db_path = Some(db.clone());
    }
    info!(app = APP_NAME, version = env!("CARGO_PKG_VERSION"), ?config, "starting");

    let store = config.open_store();
    let mut tracker = Tracker::open(store);

    let output = cli::dispatch(&mut tracker, &args.command)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
