//! Host flows around the engine: hourly tick, start and end of the work day.

use crate::backend::Backend;
use crate::core::CycleOptions;
use crate::core::journal::Journal;
use crate::core::picker::TaskPicker;
use crate::core::reconcile::{CycleReport, ReconcileLogic};
use crate::core::store::WriteOffStore;
use crate::core::sync::sync_checkins;
use crate::errors::{AppError, AppResult};
use crate::models::day_state::DayState;
use crate::models::write_off::TaskId;
use crate::utils::date;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartDayReport {
    pub new_day: bool,
    pub synced: usize,
    /// Commit of work left scheduled on the previous day.
    pub backlog: Option<CycleReport>,
    pub capacity: u32,
    pub stale_removed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndDayReport {
    pub closed: bool,
    pub cycle: Option<CycleReport>,
}

pub struct WorkdayLogic;

impl WorkdayLogic {
    /// Capacity of the tracked day, asking the tracker if none was stored.
    pub fn capacity(backend: &dyn Backend, day: &DayState) -> AppResult<u32> {
        match day.capacity {
            Some(c) => Ok(c),
            None => backend.daily_capacity(),
        }
    }

    /// Hourly tick: queue the hours and write them off right away.
    pub fn schedule(
        backend: &dyn Backend,
        store: &mut WriteOffStore,
        day: &DayState,
        task_id: TaskId,
        hours: u32,
        options: &CycleOptions,
        journal: &mut dyn Journal,
    ) -> AppResult<CycleReport> {
        if hours == 0 {
            return Err(AppError::InvalidHours(0));
        }

        store.schedule_work(task_id, hours, options.now)?;
        journal.record(
            "schedule",
            &task_id.to_string(),
            &format!(
                "{} hour(s) scheduled at {}",
                hours,
                date::display_datetime(&options.now)
            ),
        );

        let capacity = Self::capacity(backend, day)?;
        ReconcileLogic::checkin_scheduled_work(backend, store, capacity, options, journal)
    }

    /// Logon: pick up today's check-ins and, on the first logon of a day,
    /// flush yesterday's leftovers and fetch the new capacity.
    pub fn start_day(
        backend: &dyn Backend,
        store: &mut WriteOffStore,
        day: &mut DayState,
        options: &CycleOptions,
        journal: &mut dyn Journal,
    ) -> AppResult<StartDayReport> {
        let today = options.now.date_naive();
        let synced = sync_checkins(backend, store, options.now, journal)?;

        let mut backlog = None;
        let new_day = !day.started_on(today);

        if new_day {
            // every tracker read happens before the backlog is written
            let previous = Self::capacity(backend, day)?;
            let next = backend.daily_capacity()?;

            if store.scheduled_time() != 0 {
                backlog = Some(ReconcileLogic::checkin_scheduled_work(
                    backend, store, previous, options, journal,
                )?);
            }

            day.capacity = Some(next);
            day.begin = Some(options.now);

            journal.record(
                "day_start",
                "",
                &format!(
                    "{}: Welcome to a new day!",
                    date::display_datetime(&options.now)
                ),
            );
        }

        let stale_removed = store.clear_stale(today);

        Ok(StartDayReport {
            new_day,
            synced,
            backlog,
            capacity: Self::capacity(backend, day)?,
            stale_removed,
        })
    }

    /// Logoff: close the day when enough time passed (filling the plan up to
    /// capacity) or when enough hours are already accounted for.
    pub fn end_day(
        backend: &dyn Backend,
        store: &mut WriteOffStore,
        day: &mut DayState,
        options: &CycleOptions,
        journal: &mut dyn Journal,
        picker: &TaskPicker<'_>,
    ) -> AppResult<EndDayReport> {
        let capacity = Self::capacity(backend, day)?;

        if day.elapsed_more_than(options.now, capacity) {
            let cycle = Self::plan(backend, store, day, capacity, options, journal, picker)?;
            return Ok(EndDayReport {
                closed: true,
                cycle: Some(cycle),
            });
        }

        if capacity <= store.scheduled_time() + store.checkined_time() {
            let cycle =
                ReconcileLogic::checkin_scheduled_work(backend, store, capacity, options, journal)?;
            return Ok(EndDayReport {
                closed: true,
                cycle: Some(cycle),
            });
        }

        journal.record(
            "day_end_skipped",
            "",
            "Work day not over yet, nothing to close",
        );
        Ok(EndDayReport {
            closed: false,
            cycle: None,
        })
    }

    /// Daily plan reconciliation with the host's task picker.
    pub fn plan(
        backend: &dyn Backend,
        store: &mut WriteOffStore,
        day: &mut DayState,
        capacity: u32,
        options: &CycleOptions,
        journal: &mut dyn Journal,
        picker: &TaskPicker<'_>,
    ) -> AppResult<CycleReport> {
        let mut pick_error = None;

        let report = ReconcileLogic::sync_daily_plan(
            backend,
            store,
            capacity,
            options,
            journal,
            || match picker.pick(day) {
                Ok(task) => task,
                Err(e) => {
                    pick_error = Some(e.to_string());
                    None
                }
            },
        )?;

        if let Some(e) = pick_error {
            journal.record("pick_failed", "", &e);
        }

        Ok(report)
    }
}
