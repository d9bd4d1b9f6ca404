//! Session-scoped log store.
//!
//! An append-only, structurally ordered sequence of logged activities.
//! Exactly one writer (the interacting user) and one reader context (the
//! rendering of aggregates) exist per session; derived views are always
//! recomputed from the full sequence.

use chrono::NaiveDate;

use crate::models::log_entry::LogEntry;

#[derive(Debug, Default)]
pub struct LogStore {
    entries: Vec<LogEntry>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append one entry. Always succeeds; timestamp ordering is not
    /// enforced.
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Remove the most recent same-day occurrence of an activity.
    ///
    /// Scans positions from the end of the store backwards and removes the
    /// first entry matching both the activity id and calendar-day equality
    /// with `day`. "Most recent" is append order, not timestamp order.
    /// Returns the removed entry, or None when nothing matched (a no-op,
    /// not an error).
    pub fn remove_latest_on_day(&mut self, activity_id: u32, day: NaiveDate) -> Option<LogEntry> {
        for i in (0..self.entries.len()).rev() {
            let entry = &self.entries[i];
            if entry.activity_id == activity_id && entry.falls_on(day) {
                return Some(self.entries.remove(i));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::aggregate_day;
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
    fn append_preserves_structural_order() {
        let mut store = LogStore::new();
        store.append(entry_on(3, day(), 8, 0));
        store.append(entry_on(1, day(), 7, 0)); // earlier timestamp, later append
        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].activity_id, 3);
        assert_eq!(store.entries()[1].activity_id, 1);
    }

    #[test]
    fn remove_latest_on_day_is_noop_on_miss() {
        let mut store = LogStore::new();
        store.append(entry_on(3, day(), 8, 0));

        // wrong activity
        assert!(store.remove_latest_on_day(5, day()).is_none());
        // wrong day
        let other = day().succ_opt().unwrap();
        assert!(store.remove_latest_on_day(3, other).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_targets_structurally_last_match_not_timestamp_latest() {
        let mut store = LogStore::new();
        store.append(entry_on(3, day(), 14, 0));
        // appended later but timestamped earlier
        store.append(entry_on(3, day(), 9, 0));

        let removed = store.remove_latest_on_day(3, day()).unwrap();
        assert_eq!(removed.time_str(), "09:00");
        assert_eq!(store.entries()[0].time_str(), "14:00");
    }

    #[test]
    fn remove_skips_entries_of_other_days() {
        let yesterday = day().pred_opt().unwrap();
        let mut store = LogStore::new();
        store.append(entry_on(3, day(), 8, 0));
        store.append(entry_on(3, yesterday, 23, 0));

        let removed = store.remove_latest_on_day(3, day()).unwrap();
        assert_eq!(removed.date_str(), "2026-08-03");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_then_readd_restores_aggregate_counts() {
        let mut store = LogStore::new();
        store.append(entry_on(2, day(), 7, 30));
        store.append(entry_on(2, day(), 19, 0));
        store.append(entry_on(5, day(), 12, 0));

        let before: Vec<(u32, u32)> = aggregate_day(store.entries(), day())
            .iter()
            .map(|a| (a.activity_id, a.count))
            .collect();

        store.remove_latest_on_day(2, day()).unwrap();
        store.append(entry_on(2, day(), 20, 0));

        let after: Vec<(u32, u32)> = aggregate_day(store.entries(), day())
            .iter()
            .map(|a| (a.activity_id, a.count))
            .collect();

        assert_eq!(before, after);
    }
}
