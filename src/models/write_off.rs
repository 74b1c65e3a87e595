use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier of a task on the work tracker.
pub type TaskId = i64;

/// Classification derived from the `recorded` / `created_by_user` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WriteOffKind {
    /// Scheduled by the tool, not yet written to the tracker.
    Pending,
    /// Written to the tracker by the user (or committed on the same day).
    UserConfirmed,
    /// Backlog from a previous day, written by the tool.
    Committed,
}

impl WriteOffKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOffKind::Pending => "pending",
            WriteOffKind::UserConfirmed => "confirmed",
            WriteOffKind::Committed => "committed",
        }
    }
}

/// A single amount of hours charged (or about to be charged) to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOff {
    pub task_id: TaskId,
    pub hours: u32,
    pub time: DateTime<Local>,
    pub recorded: bool,
    pub created_by_user: bool,
}

impl WriteOff {
    /// Hours scheduled by the tool at `time`, waiting for a commit.
    pub fn scheduled(task_id: TaskId, hours: u32, time: DateTime<Local>) -> Self {
        Self {
            task_id,
            hours,
            time,
            recorded: false,
            created_by_user: false,
        }
    }

    /// Hours the user wrote off on the tracker by themselves.
    pub fn user_checkin(task_id: TaskId, hours: u32, time: DateTime<Local>) -> Self {
        Self {
            task_id,
            hours,
            time,
            recorded: true,
            created_by_user: true,
        }
    }

    /// Result of a successful commit. Same-day commits count as a normal
    /// user check-in, backlog commits keep their tool provenance.
    pub fn committed(
        task_id: TaskId,
        hours: u32,
        time: DateTime<Local>,
        same_day: bool,
    ) -> Self {
        Self {
            task_id,
            hours,
            time,
            recorded: true,
            created_by_user: same_day,
        }
    }

    pub fn kind(&self) -> AppResult<WriteOffKind> {
        match (self.recorded, self.created_by_user) {
            (false, false) => Ok(WriteOffKind::Pending),
            (true, true) => Ok(WriteOffKind::UserConfirmed),
            (true, false) => Ok(WriteOffKind::Committed),
            (false, true) => Err(AppError::InvalidRecord(format!(
                "task {} at {}: user-created hours must be recorded",
                self.task_id,
                self.time_str()
            ))),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.kind(), Ok(WriteOffKind::Pending))
    }

    pub fn is_user_confirmed(&self) -> bool {
        matches!(self.kind(), Ok(WriteOffKind::UserConfirmed))
    }

    /// Check the invariants every live record must hold.
    pub fn validate(&self) -> AppResult<()> {
        if self.hours == 0 {
            return Err(AppError::InvalidRecord(format!(
                "task {} at {}: hours must be positive",
                self.task_id,
                self.time_str()
            )));
        }
        self.kind().map(|_| ())
    }

    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.time.date_naive() == day
    }

    /// Same check-in as reported by the tracker.
    pub fn same_checkin(&self, task_id: TaskId, time: &DateTime<Local>) -> bool {
        self.task_id == task_id && self.time == *time
    }

    pub fn time_str(&self) -> String {
        date::format_datetime(&self.time)
    }
}
