//! Daily aggregation of log entries.
//!
//! The aggregation window is a calendar day in local time: two instants
//! belong to the same day iff their local year, month and day-of-month
//! match. Never a rolling 24-hour window.

use chrono::NaiveDate;

use crate::models::aggregated::AggregatedActivity;
use crate::models::log_entry::LogEntry;

/// Group the entries falling on `day` by activity id.
///
/// Output order is the order of first occurrence within the filtered set,
/// one AggregatedActivity per distinct activity id seen that day. The
/// `gallons` field stays per-occurrence; display totals are computed at
/// presentation time. An empty log set yields an empty sequence.
pub fn aggregate_day(logs: &[LogEntry], day: NaiveDate) -> Vec<AggregatedActivity> {
    let mut out: Vec<AggregatedActivity> = Vec::new();

    for entry in logs.iter().filter(|e| e.falls_on(day)) {
        match out.iter().position(|a| a.activity_id == entry.activity_id) {
            Some(i) => out[i].count += 1,
            None => out.push(AggregatedActivity {
                activity_id: entry.activity_id,
                name: entry.name.clone(),
                gallons: entry.gallons,
                count: 1,
            }),
        }
    }

    out
}

/// Total gallons used on `day`.
pub fn day_total(logs: &[LogEntry], day: NaiveDate) -> u32 {
    logs.iter()
        .filter(|e| e.falls_on(day))
        .map(|e| e.gallons)
        .sum()
}

/// Entries for `day` in chronological order, for detail views.
pub fn entries_for_day(logs: &[LogEntry], day: NaiveDate) -> Vec<LogEntry> {
    let mut out: Vec<LogEntry> = logs.iter().filter(|e| e.falls_on(day)).cloned().collect();
    out.sort_by_key(|e| e.timestamp_ms());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use chrono::{Local, NaiveDate};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
    }

    fn entry_on(id: u32, date: NaiveDate, hh: u32, mm: u32) -> LogEntry {
        let template = catalog::find_by_id(id).unwrap();
        let ts = date
            .and_hms_opt(hh, mm, 0)
            .unwrap()
            .and_local_timezone(Local)
            .unwrap();
        LogEntry::new(template, ts)
    }

    #[test]
    fn empty_log_set_yields_empty_aggregate() {
        assert!(aggregate_day(&[], day()).is_empty());
        assert_eq!(day_total(&[], day()), 0);
    }

    #[test]
    fn repeated_activity_counts_up_with_display_total() {
        // "10 Minute Shower" (30 gal) logged twice on the same day
        let logs = vec![entry_on(2, day(), 7, 30), entry_on(2, day(), 19, 0)];

        let agg = aggregate_day(&logs, day());
        assert_eq!(agg.len(), 1);
        assert_eq!(agg[0].count, 2);
        assert_eq!(agg[0].gallons, 30); // per occurrence, not pre-multiplied
        assert_eq!(agg[0].total_gallons(), 60);
    }

    #[test]
    fn groups_keep_first_occurrence_order() {
        let logs = vec![
            entry_on(5, day(), 9, 0),
            entry_on(3, day(), 10, 0),
            entry_on(5, day(), 11, 0),
            entry_on(8, day(), 12, 0),
        ];

        let ids: Vec<u32> = aggregate_day(&logs, day())
            .iter()
            .map(|a| a.activity_id)
            .collect();
        assert_eq!(ids, vec![5, 3, 8]);
    }

    #[test]
    fn aggregation_preserves_total_gallons() {
        let other = day().pred_opt().unwrap();
        let logs = vec![
            entry_on(1, day(), 7, 0),
            entry_on(2, day(), 8, 0),
            entry_on(2, day(), 9, 0),
            entry_on(10, day(), 21, 0),
            entry_on(4, other, 13, 0), // different day, excluded
        ];

        let aggregated: u32 = aggregate_day(&logs, day())
            .iter()
            .map(|a| a.total_gallons())
            .sum();
        assert_eq!(aggregated, day_total(&logs, day()));
        assert_eq!(aggregated, 15 + 30 + 30 + 45);
    }

    #[test]
    fn untimestamped_entries_are_excluded() {
        let mut no_ts = entry_on(3, day(), 8, 0);
        no_ts.timestamp = None;
        let logs = vec![no_ts, entry_on(3, day(), 9, 0)];

        let agg = aggregate_day(&logs, day());
        assert_eq!(agg.len(), 1);
        assert_eq!(agg[0].count, 1);
    }

    #[test]
    fn entries_for_day_are_chronological() {
        let logs = vec![
            entry_on(3, day(), 18, 0),
            entry_on(1, day(), 6, 30),
            entry_on(5, day(), 12, 0),
        ];

        let times: Vec<String> = entries_for_day(&logs, day())
            .iter()
            .map(|e| e.time_str())
            .collect();
        assert_eq!(times, vec!["06:30", "12:00", "18:00"]);
    }
}
