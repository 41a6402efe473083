use crate::export::ExportFormat;
use crate::models::BreakKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: check in, take breaks, check out and see where the day went",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Act as if the clock read this RFC 3339 instant
    #[arg(global = true, long = "at", hide = true, value_name = "RFC3339")]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, information)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the current attendance status
    Status {
        #[arg(long = "sync", help = "Recompute the status from today's record first")]
        sync: bool,
    },

    /// Check in for today
    #[command(visible_alias = "check-in")]
    In,

    /// Check out for today
    #[command(visible_alias = "check-out")]
    Out,

    /// Start a break
    Break {
        /// Kind of break
        #[arg(value_enum, default_value = "other")]
        kind: BreakKind,
    },

    /// End the running break
    #[command(visible_alias = "end-break")]
    Resume,

    /// Show today's record
    Today,

    /// List attendance records, newest first
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range (start:end)")]
        period: Option<String>,
    },

    /// Work hours and breaks for the last days
    Stats {
        #[arg(long, short, help = "Number of days to show (default from config)")]
        days: Option<u32>,
    },

    /// Export attendance records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
