//! Demo history generator.
//!
//! Stand-in for real usage history: for each of the trailing 7 days it
//! produces 1-3 entries referencing random catalog activities, timestamped
//! between 06:00 and 22:59, sorted ascending by timestamp. Identical seeds
//! produce identical histories.

use chrono::{Duration, Local, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::catalog::CATALOG;
use crate::models::log_entry::LogEntry;

pub fn generate(seed: u64, today: NaiveDate) -> Vec<LogEntry> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut logs = Vec::new();

    for day_offset in 0..7i64 {
        let day = today - Duration::days(day_offset);
        let entries = 1 + rng.gen_range(0..3);

        for _ in 0..entries {
            let template = &CATALOG[rng.gen_range(0..CATALOG.len())];
            let hour = 6 + rng.gen_range(0..16u32);
            let minute = rng.gen_range(0..60u32);
            let ts = day
                .and_hms_opt(hour, minute, 0)
                .unwrap()
                .and_local_timezone(Local)
                .unwrap();
            logs.push(LogEntry::demo(template, ts));
        }
    }

    logs.sort_by_key(|e| e.timestamp_ms());
    logs
}
