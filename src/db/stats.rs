use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::{Local, TimeZone};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL LOGGED ACTIVITIES
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM water_logs", [], |row| row.get(0))?;
    println!("{}• Total logs:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    //
    // 3) DATE RANGE
    //
    let first_ms: Option<i64> = pool
        .conn
        .query_row(
            "SELECT MIN(timestamp_ms) FROM water_logs WHERE timestamp_ms IS NOT NULL",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let last_ms: Option<i64> = pool
        .conn
        .query_row(
            "SELECT MAX(timestamp_ms) FROM water_logs WHERE timestamp_ms IS NOT NULL",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let fmt_day = |ms: Option<i64>| -> String {
        ms.and_then(|m| Local.timestamp_millis_opt(m).single())
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_day(first_ms));
    println!("    to:   {}", fmt_day(last_ms));

    //
    // 4) AVERAGE GALLONS/DAY
    //
    if let (Some(f), Some(l)) = (first_ms, last_ms) {
        let total_gallons: i64 = pool.conn.query_row(
            "SELECT COALESCE(SUM(gallons), 0) FROM water_logs WHERE timestamp_ms IS NOT NULL",
            [],
            |row| row.get(0),
        )?;

        let days = ((l - f) / 86_400_000).max(0) + 1;
        let avg = total_gallons as f64 / days as f64;
        println!("{}• Average gallons/day:{} {:.1}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
