use crate::core::store::WriteOffStore;
use crate::errors::{AppError, AppResult};
use crate::models::day_state::DayState;
use crate::models::write_off::WriteOff;
use crate::utils::date;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<WriteOff> {
    let time_str: String = row.get("time")?;

    let time = date::parse_datetime(&time_str).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(time_str.clone())),
        )
    })?;

    Ok(WriteOff {
        task_id: row.get("task_id")?,
        hours: row.get("hours")?,
        time,
        recorded: row.get::<_, i32>("recorded")? == 1,
        created_by_user: row.get::<_, i32>("created_by_user")? == 1,
    })
}

/// Load the persisted store, in store order.
pub fn load_store(conn: &Connection) -> AppResult<WriteOffStore> {
    let mut stmt = conn.prepare("SELECT * FROM write_offs ORDER BY position ASC, id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    WriteOffStore::from_records(out)
}

/// Replace the persisted store with `store`.
pub fn save_store(conn: &Connection, store: &WriteOffStore) -> AppResult<()> {
    conn.execute("DELETE FROM write_offs", [])?;

    let mut stmt = conn.prepare_cached(
        "INSERT INTO write_offs (position, task_id, hours, time, recorded, created_by_user)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    for (pos, r) in store.iter().enumerate() {
        stmt.execute(params![
            pos as i64,
            r.task_id,
            r.hours,
            date::format_datetime(&r.time),
            if r.recorded { 1 } else { 0 },
            if r.created_by_user { 1 } else { 0 },
        ])?;
    }

    Ok(())
}

fn get_value(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let v = conn
        .query_row("SELECT value FROM day_state WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(v)
}

fn set_value(conn: &Connection, key: &str, value: Option<String>) -> AppResult<()> {
    match value {
        Some(v) => {
            conn.execute(
                "INSERT INTO day_state (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, v],
            )?;
        }
        None => {
            conn.execute("DELETE FROM day_state WHERE key = ?1", [key])?;
        }
    }
    Ok(())
}

pub fn load_day_state(conn: &Connection) -> AppResult<DayState> {
    let begin = get_value(conn, "begin")?
        .map(|s| date::parse_datetime(&s))
        .transpose()?;

    let capacity = get_value(conn, "capacity")?
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| AppError::Config(format!("Invalid stored capacity: {}", s)))
        })
        .transpose()?;

    let current_task = get_value(conn, "current_task")?
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| AppError::Config(format!("Invalid stored task id: {}", s)))
        })
        .transpose()?;

    Ok(DayState {
        begin,
        capacity,
        current_task,
    })
}

pub fn save_day_state(conn: &Connection, day: &DayState) -> AppResult<()> {
    set_value(conn, "begin", day.begin.as_ref().map(date::format_datetime))?;
    set_value(conn, "capacity", day.capacity.map(|c| c.to_string()))?;
    set_value(conn, "current_task", day.current_task.map(|t| t.to_string()))?;
    Ok(())
}
