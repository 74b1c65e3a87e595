use super::write_off::TaskId;
use chrono::{DateTime, Local, NaiveDate, TimeDelta};
use serde::Serialize;

/// Host-side bookkeeping of the tracked day (⇔ `day_state` key/value table).
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DayState {
    /// When the current tracked day started (`logon`).
    pub begin: Option<DateTime<Local>>,
    /// Hours the tracked day must total.
    pub capacity: Option<u32>,
    /// Task the user is currently working on.
    pub current_task: Option<TaskId>,
}

impl DayState {
    pub fn started_on(&self, day: NaiveDate) -> bool {
        self.begin.is_some_and(|b| b.date_naive() == day)
    }

    /// True once more than `hours` passed since the day began.
    pub fn elapsed_more_than(&self, now: DateTime<Local>, hours: u32) -> bool {
        self.begin
            .is_some_and(|b| now - b > TimeDelta::hours(i64::from(hours)))
    }
}
