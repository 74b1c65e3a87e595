//! Chooses the task unaccounted hours are charged to.

use crate::backend::tracker::SqliteTracker;
use crate::errors::{AppError, AppResult};
use crate::models::day_state::DayState;
use crate::models::strategy::WriteOffStrategy;
use crate::models::task::TaskHandle;
use crate::models::write_off::TaskId;
use rand::seq::IndexedRandom;

/// Task listing the picker needs from the tracker.
pub trait TaskSource {
    fn find_task(&self, id: TaskId) -> AppResult<Option<TaskHandle>>;
    fn list_my_tasks(&self) -> AppResult<Vec<TaskHandle>>;
}

impl TaskSource for SqliteTracker {
    fn find_task(&self, id: TaskId) -> AppResult<Option<TaskHandle>> {
        SqliteTracker::find_task(self, id)
    }

    fn list_my_tasks(&self) -> AppResult<Vec<TaskHandle>> {
        SqliteTracker::list_my_tasks(self)
    }
}

pub struct TaskPicker<'a> {
    source: &'a dyn TaskSource,
    strategy: WriteOffStrategy,
    explicit: Option<TaskId>,
}

impl<'a> TaskPicker<'a> {
    pub fn new(source: &'a dyn TaskSource, strategy: WriteOffStrategy) -> Self {
        Self {
            source,
            strategy,
            explicit: None,
        }
    }

    /// Task named on the command line; takes precedence over everything else.
    pub fn with_explicit(mut self, task: Option<TaskId>) -> Self {
        self.explicit = task;
        self
    }

    /// Load a task and make sure hours can still be charged to it.
    pub fn available(&self, id: TaskId) -> AppResult<TaskHandle> {
        let task = self
            .source
            .find_task(id)?
            .ok_or(AppError::UnknownTask(id))?;

        if !task.is_available() {
            return Err(AppError::Backend(format!(
                "Task {} is {}",
                id,
                task.state.to_db_str()
            )));
        }
        Ok(task)
    }

    /// Explicit task → remembered task → strategy. The chosen task is
    /// remembered in `day`.
    pub fn pick(&self, day: &mut DayState) -> AppResult<Option<TaskHandle>> {
        if let Some(id) = self.explicit {
            let task = self.available(id)?;
            day.current_task = Some(task.id);
            return Ok(Some(task));
        }

        if let Some(id) = day.current_task
            && let Some(task) = self.source.find_task(id)?
            && task.is_available()
        {
            return Ok(Some(task));
        }

        let picked = match self.strategy {
            WriteOffStrategy::Random => {
                let tasks = self.source.list_my_tasks()?;
                tasks.choose(&mut rand::rng()).cloned()
            }
            // nobody to ask on a CLI: leave the hours unaccounted
            WriteOffStrategy::Watch => None,
        };

        day.current_task = picked.as_ref().map(|t| t.id);
        Ok(picked)
    }
}
