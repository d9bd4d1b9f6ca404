use chrono::NaiveDate;
use serde::Serialize;

/// Total gallons used on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub total_gallons: u32,
}
