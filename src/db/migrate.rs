use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
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

/// Check if the `water_logs` table exists.
fn water_logs_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='water_logs'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `water_logs` table has a `source` column.
fn water_logs_has_source_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('water_logs')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "source" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `water_logs` table with the modern schema.
///
/// `id` is the structural append order the removal semantics rely on;
/// `timestamp_ms` is nullable to match pre-seeded rows without an instant.
fn create_water_logs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS water_logs (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            activity_id  INTEGER NOT NULL,
            name         TEXT NOT NULL,
            gallons      INTEGER NOT NULL,
            timestamp_ms INTEGER,
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_water_logs_timestamp ON water_logs(timestamp_ms);
        CREATE INDEX IF NOT EXISTS idx_water_logs_activity ON water_logs(activity_id);
        "#,
    )?;
    Ok(())
}

/// Migrate a pre-0.3 `water_logs` table to include the `source` column.
fn migrate_add_source_column(conn: &Connection) -> Result<()> {
    let version = "20260301_0007_add_source_column";

    // 1) skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if water_logs_has_source_column(conn)? {
        return Ok(());
    }

    // 2) apply
    conn.execute(
        "ALTER TABLE water_logs ADD COLUMN source TEXT NOT NULL DEFAULT 'cli';",
        [],
    )?;

    // 3) mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added source column to water_logs')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'source' to water_logs table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create water_logs if missing, otherwise reconcile the schema
    if !water_logs_table_exists(conn)? {
        create_water_logs_table(conn)?;
        success("Created water_logs table (modern schema).");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_water_logs_timestamp ON water_logs(timestamp_ms);
            CREATE INDEX IF NOT EXISTS idx_water_logs_activity ON water_logs(activity_id);
            "#,
        )?;

        migrate_add_source_column(conn)?;
    }

    Ok(())
}
