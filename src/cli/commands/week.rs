use crate::config::Config;
use crate::core::budget::evaluate_budget;
use crate::core::history::HistoryProvider;
use crate::core::weekly::weekly_totals;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_day_total};
use crate::utils::date;
use crate::utils::formatting::progress_bar;

const BAR_WIDTH: usize = 20;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let today = date::today();
    let provider = HistoryProvider::Persisted {
        database: cfg.database.clone(),
    };
    let store = provider.load(today)?;
    let totals = weekly_totals(store.entries(), today);

    println!(
        "📅 Past 7 Days (budget {} gal/day):\n",
        cfg.daily_budget_gallons
    );

    for t in &totals {
        // the weekly bars use the clamped display percent
        let status = evaluate_budget(t.total_gallons, cfg.daily_budget_gallons);
        let bar = progress_bar(status.display_percent, BAR_WIDTH);
        let color = color_for_day_total(t.total_gallons, status.over_budget);
        let marker = if status.over_budget { "  ⚠ over" } else { "" };

        println!(
            "{} {}  {}[{}] {:>3} gal{}{}",
            date::weekday_label(t.date),
            t.date,
            color,
            bar,
            t.total_gallons,
            RESET,
            marker
        );
    }

    Ok(())
}
