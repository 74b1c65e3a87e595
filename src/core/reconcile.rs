use crate::backend::Backend;
use crate::core::CycleOptions;
use crate::core::capacity::{CapacityOutcome, enforce_capacity};
use crate::core::commit::{CommitReport, commit};
use crate::core::journal::Journal;
use crate::core::merge::merge;
use crate::core::store::WriteOffStore;
use crate::core::sync::sync_checkins;
use crate::errors::AppResult;
use crate::models::task::TaskHandle;
use crate::models::write_off::TaskId;
use serde::Serialize;

/// What one orchestration call did to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub synced: usize,
    pub capacity: CapacityOutcome,
    /// Hours added to reach the daily plan, with the task they were charged to.
    pub planned: Option<(TaskId, u32)>,
    pub commit: CommitReport,
}

/// Orchestration entry points: Sync → Capacity → Merge → Commit.
pub struct ReconcileLogic;

impl ReconcileLogic {
    /// Commit whatever work is scheduled. Used on every hourly tick.
    pub fn checkin_scheduled_work(
        backend: &dyn Backend,
        store: &mut WriteOffStore,
        capacity: u32,
        options: &CycleOptions,
        journal: &mut dyn Journal,
    ) -> AppResult<CycleReport> {
        let synced = sync_checkins(backend, store, options.now, journal)?;
        let outcome = enforce_capacity(store, capacity, journal);
        let report = Self::merge_and_commit(backend, store, options, journal);

        Ok(CycleReport {
            synced,
            capacity: outcome,
            planned: None,
            commit: report,
        })
    }

    /// Make the day total reach `capacity`, charging the missing hours to
    /// the task `pick_task` returns (none leaves them unaccounted).
    pub fn sync_daily_plan<F>(
        backend: &dyn Backend,
        store: &mut WriteOffStore,
        capacity: u32,
        options: &CycleOptions,
        journal: &mut dyn Journal,
        pick_task: F,
    ) -> AppResult<CycleReport>
    where
        F: FnOnce() -> Option<TaskHandle>,
    {
        let synced = sync_checkins(backend, store, options.now, journal)?;
        let outcome = enforce_capacity(store, capacity, journal);

        let delta = i64::from(capacity)
            - i64::from(store.checkined_time())
            - i64::from(store.scheduled_time());

        let mut planned = None;

        if delta > 0 {
            match pick_task() {
                Some(task) => {
                    let hours = u32::try_from(delta).unwrap_or(u32::MAX);
                    store.schedule_work(task.id, hours, options.now)?;
                    journal.record(
                        "plan",
                        &task.id.to_string(),
                        &format!("Scheduled {hours} hour(s) to reach the daily plan"),
                    );
                    planned = Some((task.id, hours));
                }
                None => {
                    journal.record(
                        "plan_skipped",
                        "",
                        &format!("No task selected, {delta} hour(s) left unaccounted"),
                    );
                }
            }
        }

        let report = Self::merge_and_commit(backend, store, options, journal);

        Ok(CycleReport {
            synced,
            capacity: outcome,
            planned,
            commit: report,
        })
    }

    fn merge_and_commit(
        backend: &dyn Backend,
        store: &mut WriteOffStore,
        options: &CycleOptions,
        journal: &mut dyn Journal,
    ) -> CommitReport {
        let merged = merge(&store.pending());
        commit(&merged, backend, store, options, journal)
    }
}
