use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::config::StorageBackend;
use crate::core::TaskStatus;

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(about = "Turn free-form weekly schedules into a stored task list")]
#[command(long_about = "weekplan - paste a schedule, get a task list

Understands CSV rows (\"Day 1, 9am, Math\"), day headers (\"Monday\",
\"## Day 3\") followed by timed lines (\"- 9:30am Lecture\"), and most
markdown schedules in between.

QUICK START:
  weekplan add \"Day 1, 9am, Math\"      Add one task
  pbpaste | weekplan add --week 2       Add a pasted schedule to week 2
  weekplan list                         Show stored tasks by day
  weekplan status <ID> done             Mark a task completed

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  weekplan <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse schedule text and store the tasks found
    ///
    /// Text comes from the argument, from --file, or from stdin when
    /// neither is given. Lines that are not understood are skipped.
    ///
    /// # Examples
    ///
    ///   weekplan add "Day 1, 7:00 PM - 9:00 PM, Install tools"
    ///   weekplan add --file schedule.md --week 3
    ///   cat plan.txt | weekplan add --parse-only
    #[command(alias = "a")]
    Add(AddArgs),

    /// List stored tasks grouped by day
    ///
    /// # Examples
    ///
    ///   weekplan list
    ///   weekplan list --week 2 --day monday
    ///   weekplan ls -o json
    #[command(alias = "ls")]
    List {
        /// Only tasks of this week (1-5)
        #[arg(short, long)]
        week: Option<u8>,

        /// Only tasks of this day ("Monday", "Day 3", ...)
        #[arg(short, long)]
        day: Option<String>,
    },

    /// Change the status of a task
    ///
    /// # Examples
    ///
    ///   weekplan status 3f2a9c1e-... in_progress
    ///   weekplan status 3f2a9c1e-... done
    Status {
        /// Task ID
        id: String,

        /// New status
        #[arg(value_enum)]
        status: TaskStatus,
    },

    /// Edit the time or text of a task
    Edit {
        /// Task ID
        id: String,

        /// New time slot
        #[arg(long)]
        time: Option<String>,

        /// New task text
        #[arg(long)]
        task: Option<String>,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task ID
        id: String,
    },

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    ///
    /// Example: weekplan completions bash > ~/.bash_completion.d/weekplan
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_enum)]
        shell: Shell,

        /// Print installation instructions instead of the script
        #[arg(long)]
        install: bool,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Schedule text (reads stdin when omitted)
    pub text: Option<String>,

    /// Read schedule text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Week of the month the tasks belong to (1-5)
    #[arg(short, long)]
    pub week: Option<u8>,

    /// Only show what would be added, without storing anything
    #[arg(long)]
    pub parse_only: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the data directory and file locations
    Path,

    /// Select the storage backend
    Backend {
        /// Backend to use from now on
        #[arg(value_enum)]
        backend: StorageBackend,
    },
}
