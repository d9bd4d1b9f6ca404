use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;

/// Write the log entries as formatted JSON.
pub fn write_json(path: &std::path::Path, logs: &[LogEntry]) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(logs).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
