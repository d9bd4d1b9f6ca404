use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::entries_for_day;
use crate::core::history::HistoryProvider;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_budget};
use crate::utils::date;
use crate::utils::formatting::{bold, italic};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { details } = cmd {
        let today = date::today();
        let provider = HistoryProvider::Persisted {
            database: cfg.database.clone(),
        };
        let store = provider.load(today)?;
        let summary = Core::build_day_summary(store.entries(), today, cfg.daily_budget_gallons);

        println!(
            "💧 {} — {}",
            bold("Your Water Usage Today"),
            today.format("%A, %B %e")
        );

        let color = color_for_budget(summary.budget.over_budget);
        println!(
            "{}{} / {} Gallons{} ({:.0}% of budget)",
            color,
            summary.total_gallons,
            cfg.daily_budget_gallons,
            RESET,
            summary.budget.raw_percent
        );
        if summary.budget.over_budget {
            warning("Over budget!");
        }

        println!("{}", cfg.separator_char.repeat(42));

        if summary.activities.is_empty() {
            println!("{}", italic("No activities logged yet."));
        } else {
            let mut table = Table::new(vec![
                Column::left("Activity", 18),
                Column::right("Count", 5),
                Column::right("Per use", 8),
                Column::right("Total", 7),
            ]);

            for a in &summary.activities {
                table.add_row(vec![
                    a.name.clone(),
                    format!("×{}", a.count),
                    format!("{} gal", a.gallons),
                    format!("{} gal", a.total_gallons()),
                ]);
            }

            print!("{}", table.render());
        }

        if *details {
            let entries = entries_for_day(store.entries(), today);
            if !entries.is_empty() {
                println!("\nEntries:");
                for e in &entries {
                    println!("- {}  {} ({} gal)", e.time_str(), e.name, e.gallons);
                }
            }
        }
    }

    Ok(())
}
