use crate::models::log_entry::LogEntry;
use csv::Writer;

/// Write the log entries as CSV to the given file.
pub fn write_csv(path: &std::path::Path, logs: &[LogEntry]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["timestamp", "activity_id", "name", "gallons", "source"])?;

    for entry in logs {
        wtr.write_record(&[
            entry
                .timestamp
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            entry.activity_id.to_string(),
            entry.name.clone(),
            entry.gallons.to_string(),
            entry.source.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
