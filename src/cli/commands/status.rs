use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workday::WorkdayLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{load_day_state, load_store};
use crate::errors::AppResult;
use crate::models::day_state::DayState;
use crate::models::write_off::WriteOff;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_remaining};
use crate::utils::formatting::describe_kind;
use crate::utils::hours2readable;
use crate::utils::date;
use crate::utils::table::Table;
use serde::Serialize;

#[derive(Serialize)]
struct StatusView<'a> {
    day: &'a DayState,
    capacity: u32,
    checkined: u32,
    scheduled: u32,
    remaining: i64,
    records: &'a [WriteOff],
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Status { json } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database_path())?;
    let store = load_store(&pool.conn)?;
    let day = load_day_state(&pool.conn)?;
    let tracker = open_tracker(cfg)?;

    let capacity = WorkdayLogic::capacity(&tracker, &day)?;
    let checkined = store.checkined_time();
    let scheduled = store.scheduled_time();
    let remaining = i64::from(capacity) - i64::from(checkined) - i64::from(scheduled);

    if *json {
        let view = StatusView {
            day: &day,
            capacity,
            checkined,
            scheduled,
            remaining,
            records: store.records(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    header(format!("Write-offs for {}", date::today()));

    if store.is_empty() {
        info("No write-offs recorded.");
    } else {
        let mut table = Table::new(&["TIME", "TASK", "HOURS", "KIND"]);
        for r in store.iter() {
            let (label, color) = describe_kind(r.kind()?);
            table.add_colored_row(
                color,
                vec![
                    date::display_datetime(&r.time),
                    r.task_id.to_string(),
                    format!("{}h", r.hours),
                    label.to_string(),
                ],
            );
        }
        print!("{}", table.render());
        println!();
    }

    if let Some(task) = day.current_task {
        info(format!("Current task: {task}"));
    }
    println!("Strategy:   {}", cfg.strategy.as_str());
    println!("Capacity:   {}", hours2readable(i64::from(capacity), false));
    println!("Checked in: {}", hours2readable(i64::from(checkined), false));
    println!("Scheduled:  {}", hours2readable(i64::from(scheduled), false));
    println!(
        "Remaining:  {}{}{}",
        color_for_remaining(remaining),
        hours2readable(remaining, true),
        RESET
    );

    Ok(())
}
