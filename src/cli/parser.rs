use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for splish
/// CLI application to track daily water usage with SQLite
#[derive(Parser)]
#[command(
    name = "splish",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple water tracking CLI: log activities and watch your daily gallons budget",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for invalid values")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "log", help = "Print rows from the internal log table")]
        log: bool,
    },

    /// List the activity catalog
    Activities,

    /// Log one occurrence of an activity (by id or name)
    Log {
        /// Activity id (1-10) or name, e.g. "Toilet Flush"
        activity: String,

        /// Backdate the entry (YYYY-MM-DD); defaults to now
        #[arg(long = "date")]
        date: Option<String>,

        /// Time of day for a backdated entry (HH:MM)
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Remove the latest same-day occurrence of an activity
    Remove {
        /// Activity id (1-10) or name
        activity: String,

        /// Day to remove from (YYYY-MM-DD); defaults to today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Show today's usage dashboard
    Today {
        #[arg(long = "details", help = "Show today's entries in chronological order")]
        details: bool,
    },

    /// Show totals for the trailing 7 days
    Week,

    /// Show a read-only detail view for one day
    Day {
        /// Day to inspect (YYYY-MM-DD)
        date: String,
    },

    /// Populate the database with generated demo history
    Demo {
        /// Generator seed; a random one is picked (and printed) if omitted
        #[arg(long = "seed")]
        seed: Option<u64>,

        /// Delete previously generated demo entries first
        #[arg(long = "replace")]
        replace: bool,
    },

    /// Export logged activities
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

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
