use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::entries_for_day;
use crate::core::history::HistoryProvider;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::formatting::italic;

/// Read-only detail view for one day, driven by the same aggregation as
/// the dashboard.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: date_str } = cmd {
        let day =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let provider = HistoryProvider::Persisted {
            database: cfg.database.clone(),
        };
        let store = provider.load(date::today())?;

        println!("📖 Activities — {}", day.format("%A, %B %e %Y"));
        println!();

        let entries = entries_for_day(store.entries(), day);
        if entries.is_empty() {
            println!("{}", italic("No activities logged that day."));
            return Ok(());
        }

        for e in &entries {
            println!("- {}  {} ({} gal)", e.time_str(), e.name, e.gallons);
        }

        let summary = Core::build_day_summary(store.entries(), day, cfg.daily_budget_gallons);
        println!(
            "\nTotal: {} gal ({:.0}% of budget{})",
            summary.total_gallons,
            summary.budget.raw_percent,
            if summary.budget.over_budget {
                ", over"
            } else {
                ""
            }
        );
    }

    Ok(())
}
