use clap::{Parser, Subcommand};

/// Command-line interface definition for rWriteoff
/// CLI companion that schedules and reconciles daily time write-offs
#[derive(Parser)]
#[command(
    name = "rwriteoff",
    version = env!("CARGO_PKG_VERSION"),
    about = "Schedule, trim and reconcile daily time write-offs against a work tracker",
    long_about = None
)]
pub struct Cli {
    /// Override state database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override tracker database path
    #[arg(global = true, long = "tracker")]
    pub tracker: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the databases and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Manage the state database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "last", help = "Only show the last N rows")]
        last: Option<usize>,
    },

    /// Manage tasks on the tracker
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Write off hours on the tracker yourself (a user check-in)
    Checkin {
        /// Task id
        task: i64,

        /// Hours to write off
        hours: u32,
    },

    /// Schedule hours of work and write them off right away
    Schedule {
        #[arg(long = "task", help = "Task to charge (default: current task)")]
        task: Option<i64>,

        #[arg(long = "hours", default_value_t = 1, help = "Hours to schedule")]
        hours: u32,
    },

    /// Commit scheduled work now (sync → trim → merge → commit)
    Sync,

    /// Fill today's plan up to capacity and commit it
    Plan {
        #[arg(long = "task", help = "Task to charge the remaining hours to")]
        task: Option<i64>,

        #[arg(long = "strategy", help = "Override the configured strategy (watch | random)")]
        strategy: Option<String>,
    },

    /// Start the work day
    Logon,

    /// End the work day
    Logoff {
        #[arg(long = "task", help = "Task to charge the remaining hours to")]
        task: Option<i64>,

        #[arg(long = "strategy", help = "Override the configured strategy (watch | random)")]
        strategy: Option<String>,
    },

    /// Show today's write-offs
    Status {
        #[arg(long = "json", help = "Print the status as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task assigned to you
    Add {
        /// Task title
        title: String,
    },

    /// List your open tasks
    List,

    /// Close a task
    Close {
        /// Task id
        id: i64,
    },

    /// Hand a task over to someone else
    Assign {
        /// Task id
        id: i64,

        /// New assignee
        user: String,
    },

    /// Mark a task as the one you are working on
    Use {
        /// Task id
        id: i64,
    },
}
