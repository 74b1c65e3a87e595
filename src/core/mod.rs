//! Write-off reconciliation engine and the host flows built on it.

pub mod capacity;
pub mod commit;
pub mod config;
pub mod journal;
pub mod log;
pub mod merge;
pub mod picker;
pub mod reconcile;
pub mod store;
pub mod sync;
pub mod workday;

use chrono::{DateTime, Local};

/// Parameters shared by every step of one reconciliation cycle.
#[derive(Debug, Clone, Copy)]
pub struct CycleOptions {
    /// Clock reading the whole cycle runs against.
    pub now: DateTime<Local>,
    /// Move tasks to the active state when hours are written.
    pub set_active: bool,
}

impl CycleOptions {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now,
            set_active: true,
        }
    }

    pub fn with_set_active(mut self, set_active: bool) -> Self {
        self.set_active = set_active;
        self
    }
}
