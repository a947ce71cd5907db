//! Command-line surface of the `fishlog` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fishlog_shared::TimeOfDay;
use fishlog_store::KeyValueStore;

use crate::commands;
use crate::error::Result;
use crate::tracker::Tracker;

#[derive(Debug, Parser)]
#[command(name = "fishlog", version, about = "Personal catch log")]
pub struct Cli {
    /// SQLite file to use instead of the configured one
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log a new catch
    Add(CatchFields),
    /// Change fields of the catch at INDEX
    Edit {
        index: usize,
        #[command(flatten)]
        fields: CatchFields,
    },
    /// Remove the catch at INDEX
    Delete { index: usize },
    /// Show the detailed log, sorted by name
    List {
        /// Only show catches whose name contains this text
        #[arg(short, long, default_value = "")]
        search: String,
        /// Print a map search link under each location
        #[arg(long)]
        links: bool,
    },
    /// Show totals per species
    Stats,
    /// Delete every catch
    Clear,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CatchFields {
    /// Species name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Length in inches
    #[arg(short, long)]
    pub length: Option<String>,
    /// Weight in pounds
    #[arg(short, long)]
    pub weight: Option<String>,
    /// Where it was caught
    #[arg(long)]
    pub location: Option<String>,
    /// Morning, Afternoon, Evening or Night
    #[arg(short, long)]
    pub time: Option<TimeOfDay>,
    /// Photo to attach
    #[arg(long, conflicts_with = "no_image")]
    pub image: Option<PathBuf>,
    /// Remove the attached photo
    #[arg(long)]
    pub no_image: bool,
}

/// Run one command against the session and return its output.
pub fn dispatch<S: KeyValueStore>(tracker: &mut Tracker<S>, command: &Command) -> Result<String> {
    match command {
        Command::Add(fields) => commands::catches::add(tracker, fields),
        Command::Edit { index, fields } => commands::catches::edit(tracker, *index, fields),
        Command::Delete { index } => commands::catches::delete(tracker, *index),
        Command::List { search, links } => Ok(commands::views::list(tracker, search, *links)),
        Command::Stats => Ok(commands::views::stats(tracker)),
        Command::Clear => commands::catches::clear(tracker),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use fishlog_store::MemoryStore;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::try_parse_from(["fishlog", "edit", "2", "--name", "Perch", "-t", "Night"]).unwrap();
        match cli.command {
            Command::Edit { index, fields } => {
                assert_eq!(index, 2);
                assert_eq!(fields.name.as_deref(), Some("Perch"));
                assert_eq!(fields.time, Some(TimeOfDay::Night));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_image_flags_conflict() {
        assert!(Cli::try_parse_from(["fishlog", "add", "--image", "a.png", "--no-image"]).is_err());
    }

    #[test]
    fn test_dispatch_session() {
        let mut tracker = Tracker::open(MemoryStore::new());
        let run = |tracker: &mut Tracker<MemoryStore>, args: &[&str]| {
            let cli = Cli::try_parse_from(args).unwrap();
            dispatch(tracker, &cli.command).unwrap()
        };

        run(&mut tracker, &["fishlog", "add", "-n", "Trout", "-l", "12", "-w", "1.5"]);
        run(&mut tracker, &["fishlog", "add", "-n", "bass"]);
        assert!(run(&mut tracker, &["fishlog", "stats"]).starts_with("Total Fish Caught: 2"));
        assert!(run(&mut tracker, &["fishlog", "list", "-s", "TRO"]).starts_with("#0 🐟 Trout"));
        run(&mut tracker, &["fishlog", "clear"]);
        assert_eq!(tracker.total_count(), 0);
    }
}
