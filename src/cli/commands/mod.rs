pub mod checkin;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod logoff;
pub mod logon;
pub mod plan;
pub mod schedule;
pub mod status;
pub mod sync;
pub mod task;

use crate::backend::tracker::SqliteTracker;
use crate::config::Config;
use crate::core::CycleOptions;
use crate::core::capacity::CapacityOutcome;
use crate::core::journal::Journal;
use crate::core::reconcile::CycleReport;
use crate::core::store::WriteOffStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_state::DayState;
use crate::models::strategy::WriteOffStrategy;
use crate::ui::messages::{error, info, success, warning};
use chrono::Local;

pub(crate) fn open_tracker(cfg: &Config) -> AppResult<SqliteTracker> {
    SqliteTracker::open(&cfg.tracker_path(), &cfg.user_name, cfg.daily_capacity)
}

/// Strategy given on the command line, or the configured one.
pub(crate) fn resolve_strategy(requested: Option<&str>, cfg: &Config) -> AppResult<WriteOffStrategy> {
    match requested {
        Some(code) => WriteOffStrategy::from_code(code)
            .ok_or_else(|| AppError::InvalidStrategy(code.to_string())),
        None => Ok(cfg.strategy),
    }
}

pub(crate) fn cycle_options(cfg: &Config) -> CycleOptions {
    CycleOptions::new(Local::now()).with_set_active(cfg.set_active_on_write)
}

/// Run `f` against the persisted state: saved on success, left untouched on
/// error (journal lines are kept either way).
pub(crate) fn with_session<T, F>(cfg: &Config, f: F) -> AppResult<T>
where
    F: FnOnce(&mut WriteOffStore, &mut DayState, &mut dyn Journal) -> AppResult<T>,
{
    let mut pool = DbPool::new(&cfg.database_path())?;
    let mut session = pool.session()?;

    let result = {
        let (store, day, mut journal) = session.parts();
        f(store, day, &mut journal)
    };

    match result {
        Ok(v) => {
            session.save()?;
            Ok(v)
        }
        Err(e) => {
            session.discard()?;
            Err(e)
        }
    }
}

pub(crate) fn print_cycle(report: &CycleReport) {
    if report.synced > 0 {
        info(format!("Detected {} new check-in(s).", report.synced));
    }

    match report.capacity {
        CapacityOutcome::QuotaReached { discarded_hours } if discarded_hours > 0 => warning(
            format!("Daily capacity already reached: dropped {discarded_hours} scheduled hour(s)."),
        ),
        CapacityOutcome::Trimmed {
            removed_hours,
            remaining_overflow,
        } => {
            warning(format!("Trimmed {removed_hours} scheduled hour(s) over capacity."));
            if remaining_overflow > 0 {
                warning(format!("Still {remaining_overflow} hour(s) over capacity."));
            }
        }
        _ => {}
    }

    if let Some((task, hours)) = report.planned {
        info(format!("Planned {hours} hour(s) on task {task}."));
    }

    for rev in &report.commit.written {
        success(format!(
            "Wrote off {} hour(s) on task {}.",
            rev.hours, rev.task_id
        ));
    }
    for task in &report.commit.unresolved {
        error(format!("Task {task} not found on the tracker, kept for the next cycle."));
    }
    for (task, reason) in &report.commit.failed {
        error(format!("Write-off on task {task} failed ({reason}), kept for the next cycle."));
    }

    if report.commit.written.is_empty() && !report.commit.has_failures() {
        info("Nothing to write off.");
    }
}
