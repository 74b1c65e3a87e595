use crate::cli::commands::{
    cycle_options, open_tracker, print_cycle, resolve_strategy, with_session,
};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::picker::TaskPicker;
use crate::core::workday::WorkdayLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan { task, strategy } = cmd {
        let tracker = open_tracker(cfg)?;
        let options = cycle_options(cfg);
        let picker = TaskPicker::new(&tracker, resolve_strategy(strategy.as_deref(), cfg)?)
            .with_explicit(*task);

        let report = with_session(cfg, |store, day, journal| {
            let capacity = WorkdayLogic::capacity(&tracker, day)?;
            WorkdayLogic::plan(&tracker, store, day, capacity, &options, journal, &picker)
        })?;

        print_cycle(&report);
        if report.planned.is_none() && report.commit.written.is_empty() {
            warning("No task to charge the remaining hours to (use --task or `task use`).");
        }
    }

    Ok(())
}
