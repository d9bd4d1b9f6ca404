use crate::cli::parser::Commands;
use crate::core::catalog;
use crate::core::history::HistoryProvider;
use crate::core::logic::Core;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_log;
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{RESET, color_for_budget};
use crate::utils::date;
use crate::utils::time::parse_time;
use chrono::{DateTime, Local, NaiveTime};

/// Log one occurrence of a catalog activity.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Log { activity, date, at } = cmd {
        //
        // 1. Resolve the activity (mandatory)
        //
        let template = catalog::resolve(activity)
            .ok_or_else(|| AppError::UnknownActivity(activity.clone()))?;

        //
        // 2. Resolve the timestamp: now, or an explicit backdate
        //
        let timestamp = resolve_timestamp(date.as_ref(), at.as_ref())?;

        //
        // 3. Append to the persisted store
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let entry = LogEntry::new(template, timestamp);
        insert_log(&pool.conn, &entry)?;

        let _ = audit(
            &pool.conn,
            "log",
            template.name,
            &format!("Logged {} ({} gal)", template.name, template.gallons),
        );

        success(format!(
            "Logged {} (≈ {} gallons) at {}.",
            template.name,
            template.gallons,
            timestamp.format("%Y-%m-%d %H:%M")
        ));

        //
        // 4. Recompute the dashboard for the entry's day
        //
        let provider = HistoryProvider::Persisted {
            database: cfg.database.clone(),
        };
        let store = provider.load(date::today())?;
        let day = timestamp.date_naive();
        let summary = Core::build_day_summary(store.entries(), day, cfg.daily_budget_gallons);

        let color = color_for_budget(summary.budget.over_budget);
        println!(
            "   {}{} / {} gallons ({:.0}% of budget){}",
            color,
            summary.total_gallons,
            cfg.daily_budget_gallons,
            summary.budget.raw_percent,
            RESET
        );
        if summary.budget.over_budget {
            warning("Over budget!");
        }
    }

    Ok(())
}

fn resolve_timestamp(
    date: Option<&String>,
    at: Option<&String>,
) -> AppResult<DateTime<Local>> {
    if date.is_none() && at.is_none() {
        return Ok(Local::now());
    }

    let day = match date {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => date::today(),
    };

    // backdated entries without --at land at noon
    let time = match at {
        Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?,
        None => NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
    };

    Ok(day.and_time(time).and_local_timezone(Local).unwrap())
}
