//! Sink for the engine's internal log lines.
//!
//! Entries have the same shape as rows of the `log` table
//! (operation, target, message); the CLI persists them through
//! `db::log::DbJournal`.

pub trait Journal {
    fn record(&mut self, operation: &str, target: &str, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Keeps entries in memory; used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    pub entries: Vec<LogEntry>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, operation: &str) -> bool {
        self.entries.iter().any(|e| e.operation == operation)
    }

    pub fn count(&self, operation: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.operation == operation)
            .count()
    }
}

impl Journal for MemoryJournal {
    fn record(&mut self, operation: &str, target: &str, message: &str) {
        self.entries.push(LogEntry {
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }
}
