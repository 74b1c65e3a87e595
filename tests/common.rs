#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rwriteoff::backend::Backend;
use rwriteoff::core::CycleOptions;
use rwriteoff::core::picker::TaskSource;
use rwriteoff::errors::{AppError, AppResult};
use rwriteoff::models::task::{Checkin, Revision, TaskHandle, TaskState};
use rwriteoff::models::write_off::TaskId;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwo() -> Command {
    cargo_bin_cmd!("rwriteoff")
}

/// Unique state and tracker DB paths inside the system temp dir, removed if present
pub fn setup_test_db(name: &str) -> (String, String) {
    let mut state: PathBuf = env::temp_dir();
    state.push(format!("{}_rwriteoff.sqlite", name));
    let mut tracker: PathBuf = env::temp_dir();
    tracker.push(format!("{}_tracker.sqlite", name));

    let state = state.to_string_lossy().to_string();
    let tracker = tracker.to_string_lossy().to_string();
    fs::remove_file(&state).ok();
    fs::remove_file(&tracker).ok();
    (state, tracker)
}

/// Run `init` in test mode against the given databases.
pub fn init_dbs(state: &str, tracker: &str) {
    rwo()
        .args(["--db", state, "--tracker", tracker, "--test", "init"])
        .assert()
        .success();
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
}

/// Local timestamp on the test day.
pub fn at(h: u32, m: u32) -> DateTime<Local> {
    on(day(), h, m)
}

pub fn on(d: NaiveDate, h: u32, m: u32) -> DateTime<Local> {
    Local
        .from_local_datetime(&d.and_hms_opt(h, m, 0).unwrap())
        .earliest()
        .unwrap()
}

pub fn options(now: DateTime<Local>) -> CycleOptions {
    CycleOptions::new(now)
}

pub fn task(id: TaskId) -> TaskHandle {
    TaskHandle {
        id,
        title: format!("Task {id}"),
        state: TaskState::Active,
        assigned_to: "me".to_string(),
        completed: 0,
    }
}

/// Scripted tracker: every answer comes from the fields below.
pub struct FakeBackend {
    pub checkins: RefCell<Vec<Checkin>>,
    pub tasks: RefCell<HashMap<TaskId, TaskHandle>>,
    pub writes: RefCell<Vec<(TaskId, u32, bool)>>,
    pub lookups: Cell<usize>,
    pub capacity: Cell<u32>,
    pub fail_sync: Cell<bool>,
    pub fail_lookup: Cell<bool>,
    pub fail_capacity: Cell<bool>,
    pub fail_writes_for: RefCell<Vec<TaskId>>,
    /// Hours reported back instead of the requested ones.
    pub reported_hours: Cell<Option<u32>>,
    pub write_time: Cell<DateTime<Local>>,
}

impl FakeBackend {
    pub fn new(capacity: u32, write_time: DateTime<Local>) -> Self {
        Self {
            checkins: RefCell::new(Vec::new()),
            tasks: RefCell::new(HashMap::new()),
            writes: RefCell::new(Vec::new()),
            lookups: Cell::new(0),
            capacity: Cell::new(capacity),
            fail_sync: Cell::new(false),
            fail_lookup: Cell::new(false),
            fail_capacity: Cell::new(false),
            fail_writes_for: RefCell::new(Vec::new()),
            reported_hours: Cell::new(None),
            write_time: Cell::new(write_time),
        }
    }

    pub fn with_tasks(self, ids: &[TaskId]) -> Self {
        for id in ids {
            self.tasks.borrow_mut().insert(*id, task(*id));
        }
        self
    }

    pub fn add_checkin(&self, task_id: TaskId, hours: u32, changed_at: DateTime<Local>) {
        self.checkins.borrow_mut().push(Checkin {
            task_id,
            hours,
            changed_at,
        });
    }

    pub fn fail_writes_for(&self, id: TaskId) {
        self.fail_writes_for.borrow_mut().push(id);
    }

    pub fn written(&self) -> Vec<(TaskId, u32, bool)> {
        self.writes.borrow().clone()
    }
}

impl Backend for FakeBackend {
    fn confirmed_checkins(
        &self,
        from: DateTime<Local>,
        to: DateTime<Local>,
    ) -> AppResult<Vec<Checkin>> {
        if self.fail_sync.get() {
            return Err(AppError::Backend("tracker unreachable".into()));
        }
        Ok(self
            .checkins
            .borrow()
            .iter()
            .filter(|c| c.changed_at >= from && c.changed_at <= to)
            .cloned()
            .collect())
    }

    fn resolve_tasks(&self, ids: &[TaskId]) -> AppResult<HashMap<TaskId, TaskHandle>> {
        self.lookups.set(self.lookups.get() + 1);
        if self.fail_lookup.get() {
            return Err(AppError::Backend("lookup timed out".into()));
        }
        let tasks = self.tasks.borrow();
        Ok(ids
            .iter()
            .filter_map(|id| tasks.get(id).map(|t| (*id, t.clone())))
            .collect())
    }

    fn write_hours(&self, task: &TaskHandle, hours: u32, set_active: bool) -> AppResult<Revision> {
        if self.fail_writes_for.borrow().contains(&task.id) {
            return Err(AppError::Backend(format!("task {} rejected the write", task.id)));
        }
        self.writes.borrow_mut().push((task.id, hours, set_active));
        Ok(Revision {
            task_id: task.id,
            hours: self.reported_hours.get().unwrap_or(hours),
            changed_at: self.write_time.get(),
        })
    }

    fn daily_capacity(&self) -> AppResult<u32> {
        if self.fail_capacity.get() {
            return Err(AppError::Backend("capacity service unavailable".into()));
        }
        Ok(self.capacity.get())
    }
}

impl TaskSource for FakeBackend {
    fn find_task(&self, id: TaskId) -> AppResult<Option<TaskHandle>> {
        Ok(self.tasks.borrow().get(&id).cloned())
    }

    fn list_my_tasks(&self) -> AppResult<Vec<TaskHandle>> {
        let mut tasks: Vec<TaskHandle> = self
            .tasks
            .borrow()
            .values()
            .filter(|t| t.is_available())
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.id);
        Ok(tasks)
    }
}
