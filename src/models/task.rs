use super::write_off::TaskId;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TaskState {
    New,
    Active,
    Closed,
    Removed,
}

impl TaskState {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TaskState::New => "new",
            TaskState::Active => "active",
            TaskState::Closed => "closed",
            TaskState::Removed => "removed",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "new" => Some(TaskState::New),
            "active" => Some(TaskState::Active),
            "closed" => Some(TaskState::Closed),
            "removed" => Some(TaskState::Removed),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TaskState::New | TaskState::Active)
    }
}

/// Tracker-side task, as returned by a batched lookup.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaskHandle {
    pub id: TaskId,
    pub title: String,
    pub state: TaskState,
    pub assigned_to: String,
    pub completed: u32,
}

impl TaskHandle {
    pub fn is_available(&self) -> bool {
        self.state.is_open()
    }
}

/// Hours the user confirmed on the tracker, with the tracker change time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkin {
    pub task_id: TaskId,
    pub hours: u32,
    pub changed_at: DateTime<Local>,
}

/// Authoritative answer of the tracker after writing hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revision {
    pub task_id: TaskId,
    pub hours: u32,
    pub changed_at: DateTime<Local>,
}
