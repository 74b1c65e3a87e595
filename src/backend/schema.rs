use rusqlite::{Connection, Result};

/// Create the tracker tables if they do not exist yet.
pub fn ensure_tracker_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            title        TEXT NOT NULL,
            state        TEXT NOT NULL DEFAULT 'new'
                         CHECK(state IN ('new','active','closed','removed')),
            assigned_to  TEXT NOT NULL,
            completed    INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS revisions (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            task_id      INTEGER NOT NULL REFERENCES tasks(id),
            completed    INTEGER NOT NULL,
            changed_by   TEXT NOT NULL,
            assigned_to  TEXT NOT NULL,
            changed_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_revisions_task ON revisions(task_id, id);
        "#,
    )
}
