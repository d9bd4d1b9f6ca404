use crate::cli::parser::Commands;
use crate::core::catalog;
use crate::core::logic::Core;
use crate::core::store::LogStore;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_log, load_all_logs};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Remove the latest same-day occurrence of an activity.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Remove {
        activity,
        date: date_str,
    } = cmd
    {
        let template = catalog::resolve(activity)
            .ok_or_else(|| AppError::UnknownActivity(activity.clone()))?;

        let day = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        //
        // Load the persisted history in structural order and let the
        // store pick the entry; removal semantics live in one place.
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = LogStore::from_entries(load_all_logs(&mut pool)?);

        match store.remove_latest_on_day(template.id, day) {
            Some(removed) => {
                delete_log(&mut pool, removed.id)?;

                let _ = audit(
                    &pool.conn,
                    "remove",
                    template.name,
                    &format!("Removed {} on {}", template.name, day),
                );

                success(format!(
                    "Removed latest {} on {} ({} gal).",
                    removed.name, day, removed.gallons
                ));

                let summary =
                    Core::build_day_summary(store.entries(), day, cfg.daily_budget_gallons);
                println!(
                    "   {} / {} gallons ({:.0}% of budget)",
                    summary.total_gallons, cfg.daily_budget_gallons, summary.budget.raw_percent
                );
            }
            None => {
                // missing match is a no-op, not an error
                info(format!(
                    "No {} entry found on {} — nothing removed.",
                    template.name, day
                ));
            }
        }
    }

    Ok(())
}
