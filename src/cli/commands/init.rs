use crate::cli::commands::open_tracker;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the state database with all pending migrations
///  - the tracker schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rWriteoff…");

    let cfg = Config::init_all(cli.db.as_deref(), cli.tracker.as_deref(), cli.test)?;
    let db_path = cfg.database_path();

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    let tracker = open_tracker(&cfg)?;

    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "",
        &format!(
            "State database at {}, tracker at {} (user {})",
            db_path,
            cfg.tracker_path(),
            tracker.user()
        ),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("rWriteoff initialization completed!");
    Ok(())
}
