use chrono::NaiveDate;

use crate::core::aggregate::aggregate_day;
use crate::core::budget::evaluate_budget;
use crate::models::{day_summary::DaySummary, log_entry::LogEntry};

pub struct Core;

impl Core {
    /// Recompute the full dashboard view for one calendar day.
    pub fn build_day_summary(
        logs: &[LogEntry],
        day: NaiveDate,
        budget_gallons: u32,
    ) -> DaySummary {
        let activities = aggregate_day(logs, day);
        let total_gallons = activities.iter().map(|a| a.total_gallons()).sum();
        let budget = evaluate_budget(total_gallons, budget_gallons);

        DaySummary {
            activities,
            total_gallons,
            budget,
        }
    }
}
