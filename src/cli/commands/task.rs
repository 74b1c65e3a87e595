use crate::cli::commands::{open_tracker, with_session};
use crate::cli::parser::{Commands, TaskAction};
use crate::config::Config;
use crate::core::picker::TaskPicker;
use crate::db::pool::DbPool;
use crate::db::queries::load_day_state;
use crate::errors::AppResult;
use crate::models::task::TaskState;
use crate::ui::messages::{info, success};
use crate::utils::colors::GREEN;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Task { action } = cmd else {
        return Ok(());
    };

    let tracker = open_tracker(cfg)?;

    match action {
        TaskAction::Add { title } => {
            let task = tracker.create_task(title)?;
            success(format!("Task {} created: {}", task.id, task.title));
        }

        TaskAction::List => {
            let tasks = tracker.list_my_tasks()?;
            if tasks.is_empty() {
                info(format!("No open tasks assigned to {}.", tracker.user()));
                return Ok(());
            }

            let pool = DbPool::new(&cfg.database_path())?;
            let current = load_day_state(&pool.conn)?.current_task;

            let mut table = Table::new(&["ID", "STATE", "DONE", "TITLE"]);
            for t in tasks {
                let row = vec![
                    t.id.to_string(),
                    t.state.to_db_str().to_string(),
                    format!("{}h", t.completed),
                    t.title,
                ];
                if current == Some(t.id) {
                    table.add_colored_row(GREEN, row);
                } else {
                    table.add_row(row);
                }
            }
            print!("{}", table.render());
        }

        TaskAction::Close { id } => {
            tracker.set_state(*id, TaskState::Closed)?;
            success(format!("Task {id} closed."));
        }

        TaskAction::Assign { id, user } => {
            tracker.reassign_task(*id, user)?;
            success(format!("Task {id} assigned to {user}."));
        }

        TaskAction::Use { id } => {
            let task = TaskPicker::new(&tracker, cfg.strategy).available(*id)?;
            with_session(cfg, |_, day, journal| {
                day.current_task = Some(task.id);
                journal.record("task_use", &task.id.to_string(), &task.title);
                Ok(())
            })?;
            success(format!("Now working on task {}: {}", task.id, task.title));
        }
    }

    Ok(())
}
