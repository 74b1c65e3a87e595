//! Work tracker kept in a local SQLite database.
//!
//! Tasks accumulate "completed work"; every change is stored as a revision,
//! and confirmed check-ins are the positive deltas between consecutive
//! revisions made by the user.

use super::Backend;
use super::schema::ensure_tracker_schema;
use crate::errors::{AppError, AppResult};
use crate::models::task::{Checkin, Revision, TaskHandle, TaskState};
use crate::models::write_off::TaskId;
use crate::utils::date;
use chrono::{DateTime, Local, SubsecRound};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::HashMap;
use std::path::Path;

pub struct SqliteTracker {
    pub conn: Connection,
    user: String,
    capacity: u32,
}

fn map_task(row: &Row) -> rusqlite::Result<TaskHandle> {
    let state_str: String = row.get("state")?;
    let state = TaskState::from_db_str(&state_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Backend(format!("Invalid task state: {}", state_str))),
        )
    })?;

    Ok(TaskHandle {
        id: row.get("id")?,
        title: row.get("title")?,
        state,
        assigned_to: row.get("assigned_to")?,
        completed: row.get("completed")?,
    })
}

struct RevisionRow {
    task_id: TaskId,
    completed: u32,
    changed_by: String,
    assigned_to: String,
    changed_at: String,
}

impl SqliteTracker {
    pub fn open(path: &str, user: &str, capacity: u32) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Self::with_connection(conn, user, capacity)
    }

    pub fn in_memory(user: &str, capacity: u32) -> AppResult<Self> {
        Self::with_connection(Connection::open_in_memory()?, user, capacity)
    }

    fn with_connection(conn: Connection, user: &str, capacity: u32) -> AppResult<Self> {
        ensure_tracker_schema(&conn)?;
        Ok(Self {
            conn,
            user: user.to_string(),
            capacity,
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Create a task assigned to the current user.
    pub fn create_task(&self, title: &str) -> AppResult<TaskHandle> {
        let now = date::format_datetime(&Local::now());

        self.conn.execute(
            "INSERT INTO tasks (title, state, assigned_to, completed, created_at)
             VALUES (?1, 'new', ?2, 0, ?3)",
            params![title, self.user, now],
        )?;
        let id = self.conn.last_insert_rowid();

        self.conn.execute(
            "INSERT INTO revisions (task_id, completed, changed_by, assigned_to, changed_at)
             VALUES (?1, 0, ?2, ?2, ?3)",
            params![id, self.user, now],
        )?;

        self.find_task(id)?.ok_or(AppError::UnknownTask(id))
    }

    pub fn find_task(&self, id: TaskId) -> AppResult<Option<TaskHandle>> {
        let task = self
            .conn
            .query_row("SELECT * FROM tasks WHERE id = ?1", [id], map_task)
            .optional()?;
        Ok(task)
    }

    /// Open tasks assigned to the current user.
    pub fn list_my_tasks(&self) -> AppResult<Vec<TaskHandle>> {
        let mut stmt = self.conn.prepare(
            "SELECT * FROM tasks
             WHERE assigned_to = ?1 AND state IN ('new', 'active')
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([&self.user], map_task)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn set_state(&self, id: TaskId, state: TaskState) -> AppResult<()> {
        let n = self.conn.execute(
            "UPDATE tasks SET state = ?1 WHERE id = ?2",
            params![state.to_db_str(), id],
        )?;
        if n == 0 {
            return Err(AppError::UnknownTask(id));
        }
        Ok(())
    }

    /// Hand the task over to someone else; later revisions carry the new assignee.
    pub fn reassign_task(&self, id: TaskId, assignee: &str) -> AppResult<()> {
        let n = self.conn.execute(
            "UPDATE tasks SET assigned_to = ?1 WHERE id = ?2",
            params![assignee, id],
        )?;
        if n == 0 {
            return Err(AppError::UnknownTask(id));
        }
        Ok(())
    }

    /// Add completed hours to a task on behalf of the current user.
    pub fn add_hours(
        &self,
        id: TaskId,
        hours: u32,
        set_active: bool,
        at: DateTime<Local>,
    ) -> AppResult<Revision> {
        if hours == 0 {
            return Err(AppError::InvalidHours(0));
        }

        let task = self.find_task(id)?.ok_or(AppError::UnknownTask(id))?;
        if !task.state.is_open() {
            return Err(AppError::Backend(format!(
                "Task {} is {}",
                id,
                task.state.to_db_str()
            )));
        }

        // stored timestamps keep microseconds only
        let at = at.trunc_subsecs(6);
        let completed = task.completed + hours;
        let state = if set_active {
            TaskState::Active
        } else {
            task.state
        };

        self.conn.execute(
            "UPDATE tasks SET completed = ?1, state = ?2 WHERE id = ?3",
            params![completed, state.to_db_str(), id],
        )?;
        self.conn.execute(
            "INSERT INTO revisions (task_id, completed, changed_by, assigned_to, changed_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                completed,
                self.user,
                task.assigned_to,
                date::format_datetime(&at)
            ],
        )?;

        Ok(Revision {
            task_id: id,
            hours,
            changed_at: at,
        })
    }

    fn load_revisions(&self) -> AppResult<Vec<RevisionRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT task_id, completed, changed_by, assigned_to, changed_at
             FROM revisions
             ORDER BY task_id ASC, id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(RevisionRow {
                task_id: row.get(0)?,
                completed: row.get(1)?,
                changed_by: row.get(2)?,
                assigned_to: row.get(3)?,
                changed_at: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

impl Backend for SqliteTracker {
    fn confirmed_checkins(
        &self,
        from: DateTime<Local>,
        to: DateTime<Local>,
    ) -> AppResult<Vec<Checkin>> {
        if from > to {
            return Err(AppError::Backend(format!(
                "Check-in window starts after it ends ({} > {})",
                from, to
            )));
        }

        let mut out = Vec::new();
        let mut current: Option<TaskId> = None;
        let mut previous: u32 = 0;

        for rev in self.load_revisions()? {
            if current != Some(rev.task_id) {
                current = Some(rev.task_id);
                previous = 0;
            }

            let delta = i64::from(rev.completed) - i64::from(previous);
            previous = rev.completed;

            if delta < 1 {
                continue;
            }

            let changed_at = date::parse_datetime(&rev.changed_at)?;
            if changed_at < from || changed_at > to {
                continue;
            }

            // someone else touched the completed work, or the task was not ours
            if rev.changed_by != self.user || rev.assigned_to != self.user {
                continue;
            }

            out.push(Checkin {
                task_id: rev.task_id,
                hours: u32::try_from(delta).unwrap_or(u32::MAX),
                changed_at,
            });
        }

        Ok(out)
    }

    fn resolve_tasks(&self, ids: &[TaskId]) -> AppResult<HashMap<TaskId, TaskHandle>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let placeholders = vec!["?"; ids.len()].join(",");
        let sql = format!("SELECT * FROM tasks WHERE id IN ({})", placeholders);

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(ids.iter()), map_task)?;

        let mut out = HashMap::new();
        for r in rows {
            let task = r?;
            out.insert(task.id, task);
        }
        Ok(out)
    }

    fn write_hours(&self, task: &TaskHandle, hours: u32, set_active: bool) -> AppResult<Revision> {
        self.add_hours(task.id, hours, set_active, Local::now())
    }

    fn daily_capacity(&self) -> AppResult<u32> {
        Ok(self.capacity)
    }
}
