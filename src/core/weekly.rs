//! Trailing-week summarization.

use chrono::{Duration, NaiveDate};

use crate::core::aggregate::day_total;
use crate::models::day_total::DayTotal;
use crate::models::log_entry::LogEntry;

/// Totals for the trailing 7 calendar days, `today` included.
///
/// Always returns exactly 7 pairs in chronological order, oldest first,
/// today last. A day with no matching entries yields total 0; it is never
/// omitted.
pub fn weekly_totals(logs: &[LogEntry], today: NaiveDate) -> Vec<DayTotal> {
    let mut out = Vec::with_capacity(7);
    let mut date = today - Duration::days(6);

    while date <= today {
        out.push(DayTotal {
            date,
            total_gallons: day_total(logs, date),
        });
        date = date.succ_opt().unwrap();
    }

    out
}
