use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use chrono::Local;

/// Record hours on the tracker directly, the way a user would in its UI.
/// The next cycle picks them up as confirmed check-ins.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { task, hours } = cmd {
        let tracker = open_tracker(cfg)?;
        let rev = tracker.add_hours(*task, *hours, cfg.set_active_on_write, Local::now())?;

        let pool = DbPool::new(&cfg.database_path())?;
        if let Err(e) = ttlog(
            &pool.conn,
            "checkin",
            &rev.task_id.to_string(),
            &format!("{} hour(s) checked in by {}", rev.hours, tracker.user()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        success(format!("Checked in {} hour(s) on task {}.", rev.hours, rev.task_id));
    }

    Ok(())
}
