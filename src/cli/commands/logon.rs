use crate::cli::commands::{cycle_options, open_tracker, print_cycle, with_session};
use crate::config::Config;
use crate::core::workday::WorkdayLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg)?;
    let options = cycle_options(cfg);

    let report = with_session(cfg, |store, day, journal| {
        WorkdayLogic::start_day(&tracker, store, day, &options, journal)
    })?;

    if report.new_day {
        header("Welcome to a new day!");
    }
    if let Some(backlog) = &report.backlog {
        info("Committing work left from the previous day:");
        print_cycle(backlog);
    }
    if report.synced > 0 {
        info(format!("Detected {} new check-in(s).", report.synced));
    }
    if report.stale_removed > 0 {
        info(format!("Cleared {} record(s) from previous days.", report.stale_removed));
    }
    info(format!("Today's capacity: {}h", report.capacity));

    Ok(())
}
