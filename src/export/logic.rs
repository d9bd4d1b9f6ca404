use crate::db::pool::DbPool;
use crate::db::queries::{load_all_logs, load_logs_between};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::notify_export_success;
use crate::export::range::parse_range;
use crate::models::log_entry::LogEntry;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;

use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export logged activities.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or one of:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let logs: Vec<LogEntry> = match date_bounds {
            None => load_all_logs(pool)?,
            Some((from, to)) => load_logs_between(pool, from, to)?,
        };

        if logs.is_empty() {
            warning("No logged activities found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => {
                write_csv(path, &logs)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                write_json(path, &logs)?;
                notify_export_success("JSON", path);
            }
        }

        Ok(())
    }
}
