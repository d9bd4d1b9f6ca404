use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use chrono::{Duration, Local, NaiveDate, TimeZone};
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

/// Load the full history in structural (append) order.
pub fn load_all_logs(pool: &mut DbPool) -> AppResult<Vec<LogEntry>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM water_logs ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load the timestamped entries between two dates (inclusive), local time,
/// still in structural order.
pub fn load_logs_between(
    pool: &mut DbPool,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<LogEntry>> {
    let start_ms = from
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
        .timestamp_millis();
    let end_ms = (to + Duration::days(1))
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
        .timestamp_millis();

    let mut stmt = pool.conn.prepare(
        "SELECT * FROM water_logs
         WHERE timestamp_ms IS NOT NULL
           AND timestamp_ms >= ?1 AND timestamp_ms < ?2
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(params![start_ms, end_ms], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<LogEntry> {
    let ts_ms: Option<i64> = row.get("timestamp_ms")?;

    let timestamp = match ts_ms {
        Some(ms) => Some(Local.timestamp_millis_opt(ms).single().ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Integer,
                Box::new(AppError::InvalidDate(ms.to_string())),
            )
        })?),
        None => None,
    };

    Ok(LogEntry {
        id: row.get("id")?,
        activity_id: row.get("activity_id")?,
        name: row.get("name")?,
        gallons: row.get("gallons")?,
        timestamp,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_log(conn: &Connection, entry: &LogEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO water_logs (activity_id, name, gallons, timestamp_ms, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.activity_id,
            entry.name,
            entry.gallons,
            entry.timestamp_ms(),
            entry.source,
            entry.created_at,
        ],
    )?;
    Ok(())
}

pub fn delete_log(pool: &mut DbPool, id: i64) -> Result<()> {
    pool.conn
        .execute("DELETE FROM water_logs WHERE id = ?", [id])?;
    Ok(())
}

/// Delete all generated demo rows, keeping user-entered history.
pub fn delete_demo_logs(pool: &mut DbPool) -> Result<usize> {
    pool.conn
        .execute("DELETE FROM water_logs WHERE source = 'demo'", [])
}
