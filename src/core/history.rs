//! History sources for a dashboard session.

use chrono::NaiveDate;

use crate::core::demo;
use crate::core::store::LogStore;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_logs;
use crate::errors::AppResult;

/// Where a session's log history comes from.
///
/// `Persisted` reads the SQLite store in structural (append) order;
/// `RandomDemo` builds a deterministic in-memory history without touching
/// the database, so tests and the demo command share one entry point with
/// the real load path.
pub enum HistoryProvider {
    Persisted { database: String },
    RandomDemo { seed: u64 },
}

impl HistoryProvider {
    pub fn load(&self, today: NaiveDate) -> AppResult<LogStore> {
        match self {
            HistoryProvider::Persisted { database } => {
                let mut pool = DbPool::new(database)?;
                let entries = load_all_logs(&mut pool)?;
                Ok(LogStore::from_entries(entries))
            }
            HistoryProvider::RandomDemo { seed } => {
                Ok(LogStore::from_entries(demo::generate(*seed, today)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn random_demo_provider_is_deterministic() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let provider = HistoryProvider::RandomDemo { seed: 42 };

        let a = provider.load(today).unwrap();
        let b = provider.load(today).unwrap();

        assert!(!a.is_empty());
        assert_eq!(a.len(), b.len());
        for (x, y) in a.entries().iter().zip(b.entries()) {
            assert_eq!(x.activity_id, y.activity_id);
            assert_eq!(x.timestamp_ms(), y.timestamp_ms());
        }
    }
}
