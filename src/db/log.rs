use crate::core::journal::Journal;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = date::format_datetime(&Local::now());

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Journal backed by the `log` table. Logging never aborts a cycle.
pub struct DbJournal<'c> {
    conn: &'c Connection,
}

impl<'c> DbJournal<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl Journal for DbJournal<'_> {
    fn record(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(self.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}
