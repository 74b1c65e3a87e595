use crate::cli::commands::{
    cycle_options, open_tracker, print_cycle, resolve_strategy, with_session,
};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::picker::TaskPicker;
use crate::core::workday::WorkdayLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Logoff { task, strategy } = cmd {
        let tracker = open_tracker(cfg)?;
        let options = cycle_options(cfg);
        let picker = TaskPicker::new(&tracker, resolve_strategy(strategy.as_deref(), cfg)?)
            .with_explicit(*task);

        let report = with_session(cfg, |store, day, journal| {
            WorkdayLogic::end_day(&tracker, store, day, &options, journal, &picker)
        })?;

        match &report.cycle {
            Some(cycle) => print_cycle(cycle),
            None => info("Work day not over yet, nothing to close."),
        }
    }

    Ok(())
}
