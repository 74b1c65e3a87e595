use crate::cli::commands::{cycle_options, open_tracker, print_cycle, with_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::picker::TaskPicker;
use crate::core::workday::WorkdayLogic;
use crate::errors::{AppError, AppResult};

/// Hourly tick: charge `hours` to the current task and reconcile.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { task, hours } = cmd {
        let tracker = open_tracker(cfg)?;
        let options = cycle_options(cfg);
        let picker = TaskPicker::new(&tracker, cfg.strategy).with_explicit(*task);

        let report = with_session(cfg, |store, day, journal| {
            let target = picker.pick(day)?.ok_or(AppError::NoTaskSelected)?;
            WorkdayLogic::schedule(&tracker, store, day, target.id, *hours, &options, journal)
        })?;

        print_cycle(&report);
    }

    Ok(())
}
