use crate::cli::commands::{cycle_options, open_tracker, print_cycle, with_session};
use crate::config::Config;
use crate::core::reconcile::ReconcileLogic;
use crate::core::workday::WorkdayLogic;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg)?;
    let options = cycle_options(cfg);

    let report = with_session(cfg, |store, day, journal| {
        let capacity = WorkdayLogic::capacity(&tracker, day)?;
        ReconcileLogic::checkin_scheduled_work(&tracker, store, capacity, &options, journal)
    })?;

    print_cycle(&report);
    Ok(())
}
