//! Capability set the reconciliation engine needs from a work tracker.

pub mod schema;
pub mod tracker;

use crate::errors::AppResult;
use crate::models::task::{Checkin, Revision, TaskHandle};
use crate::models::write_off::TaskId;
use chrono::{DateTime, Local};
use std::collections::HashMap;

pub trait Backend {
    /// Hours the user confirmed on the tracker within `[from, to]`.
    fn confirmed_checkins(&self, from: DateTime<Local>, to: DateTime<Local>)
    -> AppResult<Vec<Checkin>>;

    /// Batched lookup; ids missing from the map are unresolved.
    fn resolve_tasks(&self, ids: &[TaskId]) -> AppResult<HashMap<TaskId, TaskHandle>>;

    /// Charge `hours` to `task`. The reported hours may differ from the request.
    fn write_hours(&self, task: &TaskHandle, hours: u32, set_active: bool) -> AppResult<Revision>;

    /// Hours the current day must total.
    fn daily_capacity(&self) -> AppResult<u32>;
}
