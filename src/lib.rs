//! rWriteoff library root.
//! Exposes the CLI parser, the high-level run() function, the reconciliation
//! engine and its storage.

pub mod backend;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Task { .. } => c::task::handle(&cli.command, cfg),
        Commands::Checkin { .. } => c::checkin::handle(&cli.command, cfg),
        Commands::Schedule { .. } => c::schedule::handle(&cli.command, cfg),
        Commands::Sync => c::sync::handle(cfg),
        Commands::Plan { .. } => c::plan::handle(&cli.command, cfg),
        Commands::Logon => c::logon::handle(cfg),
        Commands::Logoff { .. } => c::logoff::handle(&cli.command, cfg),
        Commands::Status { .. } => c::status::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line overrides win over the config file
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_tracker) = &cli.tracker {
        cfg.tracker_database = custom_tracker.clone();
    }

    dispatch(&cli, &cfg)
}
