use crate::backend::Backend;
use crate::core::CycleOptions;
use crate::core::journal::Journal;
use crate::core::merge::MergedWriteOff;
use crate::core::store::WriteOffStore;
use crate::errors::AppResult;
use crate::models::task::{Revision, TaskHandle};
use crate::models::write_off::{TaskId, WriteOff, WriteOffKind};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitReport {
    /// Tracker answers for the writes that went through.
    pub written: Vec<Revision>,
    /// Tasks the tracker does not know (left pending).
    pub unresolved: Vec<TaskId>,
    /// Writes the tracker rejected, with the reason (left pending).
    pub failed: Vec<(TaskId, String)>,
    /// Entries that are not pending work and were not written.
    pub skipped: Vec<TaskId>,
    /// Stale records cleared once the batch finished.
    pub stale_removed: usize,
}

impl CommitReport {
    pub fn written_hours(&self) -> u32 {
        self.written.iter().map(|r| r.hours).sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.unresolved.is_empty() || !self.failed.is_empty()
    }
}

/// Write merged pending work to the tracker.
///
/// Every entry is attempted; a failure only keeps that task's pending
/// records for the next cycle.
pub fn commit(
    merged: &[MergedWriteOff],
    backend: &dyn Backend,
    store: &mut WriteOffStore,
    options: &CycleOptions,
    journal: &mut dyn Journal,
) -> CommitReport {
    let mut report = CommitReport::default();

    let to_write: Vec<&WriteOff> = merged
        .iter()
        .filter_map(|m| match m.kind() {
            Some(WriteOffKind::Pending) => Some(&m.record),
            _ => {
                report.skipped.push(m.record.task_id);
                journal.record(
                    "commit_skip",
                    &m.record.task_id.to_string(),
                    "Only pending work is written",
                );
                None
            }
        })
        .collect();

    if !to_write.is_empty() {
        let ids: Vec<TaskId> = to_write.iter().map(|w| w.task_id).collect();

        // a failed lookup leaves the whole batch unresolved
        let handles = match backend.resolve_tasks(&ids) {
            Ok(h) => h,
            Err(e) => {
                journal.record("commit_lookup_failed", "", &e.to_string());
                HashMap::new()
            }
        };

        for w in to_write {
            let target = w.task_id.to_string();

            let Some(handle) = handles.get(&w.task_id) else {
                journal.record("commit_unresolved", &target, "Cannot find task on the tracker");
                report.unresolved.push(w.task_id);
                continue;
            };

            match write_one(w, handle, backend, store, options) {
                Ok(Some(rev)) => {
                    journal.record(
                        "commit",
                        &target,
                        &format!("Wrote off {} hour(s) (requested {})", rev.hours, w.hours),
                    );
                    report.written.push(rev);
                }
                Ok(None) => {
                    journal.record(
                        "commit_empty",
                        &target,
                        "Tracker accepted the write but reported no hours",
                    );
                }
                Err(e) => {
                    journal.record("commit_failed", &target, &e.to_string());
                    report.failed.push((w.task_id, e.to_string()));
                }
            }
        }
    }

    report.stale_removed = store.clear_stale(options.now.date_naive());
    if report.stale_removed > 0 {
        journal.record(
            "clear_stale",
            "",
            &format!("Removed {} record(s) of previous days", report.stale_removed),
        );
    }

    report
}

fn write_one(
    w: &WriteOff,
    handle: &TaskHandle,
    backend: &dyn Backend,
    store: &mut WriteOffStore,
    options: &CycleOptions,
) -> AppResult<Option<Revision>> {
    let rev = backend.write_hours(handle, w.hours, options.set_active)?;

    store.remove_where(|r| r.task_id == w.task_id && r.is_pending());

    if rev.hours == 0 {
        return Ok(None);
    }

    let same_day = w.time.date_naive() == options.now.date_naive();
    store.push(WriteOff::committed(
        w.task_id,
        rev.hours,
        rev.changed_at,
        same_day,
    ))?;

    Ok(Some(rev))
}
