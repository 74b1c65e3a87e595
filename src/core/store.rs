//! Record Store: the ordered set of write-offs of the tracked day.
//!
//! Aggregates are plain functions over a slice so that every component
//! computes them the same way; `WriteOffStore` mirrors them as methods.

use crate::errors::AppResult;
use crate::models::write_off::{TaskId, WriteOff};
use chrono::{DateTime, Local, NaiveDate};

/// Sum of hours scheduled by the tool and not yet committed.
pub fn scheduled_time(records: &[WriteOff]) -> u32 {
    records
        .iter()
        .filter(|r| r.is_pending())
        .map(|r| r.hours)
        .sum()
}

/// Sum of hours the user already has on the tracker.
pub fn checkined_time(records: &[WriteOff]) -> u32 {
    records
        .iter()
        .filter(|r| r.is_user_confirmed())
        .map(|r| r.hours)
        .sum()
}

/// Pending records, in insertion order.
pub fn pending(records: &[WriteOff]) -> Vec<WriteOff> {
    records.iter().filter(|r| r.is_pending()).cloned().collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOffStore {
    records: Vec<WriteOff>,
}

impl WriteOffStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted records, rejecting invalid ones.
    pub fn from_records(records: Vec<WriteOff>) -> AppResult<Self> {
        for r in &records {
            r.validate()?;
        }
        Ok(Self { records })
    }

    pub fn push(&mut self, record: WriteOff) -> AppResult<()> {
        record.validate()?;
        self.records.push(record);
        Ok(())
    }

    /// Queue `hours` on `task_id` for the next commit.
    pub fn schedule_work(
        &mut self,
        task_id: TaskId,
        hours: u32,
        now: DateTime<Local>,
    ) -> AppResult<()> {
        self.push(WriteOff::scheduled(task_id, hours, now))
    }

    /// Remove every record matching `pred`; returns how many were removed.
    pub fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&WriteOff) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|r| !pred(r));
        before - self.records.len()
    }

    /// Remove the records at the given positions.
    pub(crate) fn remove_indices(&mut self, indices: &[usize]) {
        let mut idx = 0;
        self.records.retain(|_| {
            let keep = !indices.contains(&idx);
            idx += 1;
            keep
        });
    }

    pub fn contains_checkin(&self, task_id: TaskId, time: &DateTime<Local>) -> bool {
        self.records.iter().any(|r| r.same_checkin(task_id, time))
    }

    pub fn scheduled_time(&self) -> u32 {
        scheduled_time(&self.records)
    }

    pub fn checkined_time(&self) -> u32 {
        checkined_time(&self.records)
    }

    pub fn pending(&self) -> Vec<WriteOff> {
        pending(&self.records)
    }

    /// Drop records that do not belong to `today`.
    ///
    /// Pending backlog stays: it has not been written yet and the next
    /// cycle must still commit it.
    pub fn clear_stale(&mut self, today: NaiveDate) -> usize {
        self.remove_where(|r| !r.is_on(today) && !r.is_pending())
    }

    pub fn records(&self) -> &[WriteOff] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WriteOff> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
