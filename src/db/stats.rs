use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORDS BY KIND
    //
    let (pending, confirmed, committed): (i64, i64, i64) = pool.conn.query_row(
        "SELECT
            COALESCE(SUM(CASE WHEN recorded = 0 THEN 1 ELSE 0 END), 0),
            COALESCE(SUM(CASE WHEN recorded = 1 AND created_by_user = 1 THEN 1 ELSE 0 END), 0),
            COALESCE(SUM(CASE WHEN recorded = 1 AND created_by_user = 0 THEN 1 ELSE 0 END), 0)
         FROM write_offs",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;

    println!("{}• Write-offs:{}", CYAN, RESET);
    println!("    pending:   {}{}{}", GREEN, pending, RESET);
    println!("    confirmed: {}{}{}", GREEN, confirmed, RESET);
    println!("    committed: {}{}{}", GREEN, committed, RESET);

    //
    // 3) LOG SIZE AND LAST CYCLE
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log rows:{} {}", CYAN, RESET, log_rows);

    let last_commit: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM log WHERE operation = 'commit' ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_last = last_commit.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Last commit:{} {}", CYAN, RESET, fmt_last);

    println!();
    Ok(())
}
