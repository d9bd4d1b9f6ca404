use crate::models::activity::ActivityTemplate;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub id: i64,            // ⇔ water_logs.id (0 until persisted)
    pub activity_id: u32,   // ⇔ water_logs.activity_id
    pub name: String,       // ⇔ water_logs.name
    pub gallons: u32,       // ⇔ water_logs.gallons
    pub timestamp: Option<DateTime<Local>>, // ⇔ water_logs.timestamp_ms (INT, nullable)
    pub source: String,     // ⇔ water_logs.source ('cli' | 'demo')
    pub created_at: String, // ⇔ water_logs.created_at (TEXT, ISO8601)
}

impl LogEntry {
    /// High-level constructor for entries logged from the CLI.
    /// Name and gallons are copied from the template at creation time;
    /// persisted rows never re-derive them from the catalog.
    pub fn new(template: &ActivityTemplate, timestamp: DateTime<Local>) -> Self {
        Self {
            id: 0,
            activity_id: template.id,
            name: template.name.to_string(),
            gallons: template.gallons,
            timestamp: Some(timestamp),
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Constructor for generated demo history.
    pub fn demo(template: &ActivityTemplate, timestamp: DateTime<Local>) -> Self {
        Self {
            source: "demo".to_string(),
            ..Self::new(template, timestamp)
        }
    }

    pub fn timestamp_ms(&self) -> Option<i64> {
        self.timestamp.map(|t| t.timestamp_millis())
    }

    /// Calendar-day equality: local-time year, month and day-of-month match.
    /// Entries without a timestamp never match.
    pub fn falls_on(&self, day: NaiveDate) -> bool {
        self.timestamp.is_some_and(|t| t.date_naive() == day)
    }

    pub fn time_str(&self) -> String {
        match self.timestamp {
            Some(t) => t.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }

    pub fn date_str(&self) -> String {
        match self.timestamp {
            Some(t) => t.format("%Y-%m-%d").to_string(),
            None => "-".to_string(),
        }
    }
}
