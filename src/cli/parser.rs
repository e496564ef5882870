use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Command-line interface definition for weektracker
/// Track work shifts in plain per-week text files
#[derive(Parser)]
#[command(
    name = "weektracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work shifts in plain per-week text files",
    long_about = None
)]
pub struct Cli {
    /// Use another configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use this week file instead of the one for the current week
    #[arg(global = true, short = 'f', long = "weekfile", value_name = "WEEKFILE")]
    pub weekfile: Option<PathBuf>,

    /// Look at a week relative to the current one (report, edit and path)
    #[arg(
        global = true,
        short = 'w',
        long = "week",
        value_name = "WEEK",
        allow_negative_numbers = true
    )]
    pub week: Option<i32>,

    /// Pin the current time (YYYY-MM-DDTHH:MM)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a shift now
    Start,

    /// Stop today's open shift now
    Stop,

    /// Show time tracked today and this week (the default)
    Report {
        /// Print nothing; exit 0 if a shift is ongoing, 1 otherwise
        #[arg(short = 'i', long = "is-working")]
        is_working: bool,
    },

    /// Open the week file in an editor
    Edit {
        #[arg(
            long = "editor",
            help = "Specify the editor to use (overrides the config file, $VISUAL and $EDITOR)"
        )]
        editor: Option<String>,
    },

    /// Print the path of the week file
    Path,

    /// Write the default configuration and create the data directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $VISUAL, $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
