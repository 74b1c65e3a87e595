use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `write_offs` table (one row per record, `position` keeps the
/// store order).
fn create_write_offs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS write_offs (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            position        INTEGER NOT NULL,
            task_id         INTEGER NOT NULL,
            hours           INTEGER NOT NULL CHECK(hours > 0),
            time            TEXT NOT NULL,
            recorded        INTEGER NOT NULL DEFAULT 0 CHECK(recorded IN (0, 1)),
            created_by_user INTEGER NOT NULL DEFAULT 0 CHECK(created_by_user IN (0, 1)),
            CHECK (NOT (recorded = 0 AND created_by_user = 1))
        );
        "#,
    )?;
    Ok(())
}

fn create_day_state_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS day_state (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn migrate_add_checkin_index(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_write_offs_checkin_index";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_write_offs_checkin ON write_offs(task_id, time);",
    )?;

    mark_applied(conn, version, "Added (task_id, time) index to write_offs")?;

    success(format!(
        "Migration applied: {} → indexed write_offs by check-in",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "write_offs")? {
        create_write_offs_table(conn)?;
        success("Created write_offs table.");
    }

    if !table_exists(conn, "day_state")? {
        create_day_state_table(conn)?;
        success("Created day_state table.");
    }

    migrate_add_checkin_index(conn)?;

    Ok(())
}
