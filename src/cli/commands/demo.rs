use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryProvider;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_demo_logs, insert_log};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;
use rand::Rng;

/// Populate the database with generated demo history.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Demo { seed, replace } = cmd {
        // pick a random seed when none is given; print it so the run can
        // be reproduced
        let seed = seed.unwrap_or_else(|| rand::thread_rng().r#gen());
        let today = date::today();

        let mut pool = DbPool::new(&cfg.database)?;

        if *replace {
            let n = delete_demo_logs(&mut pool)?;
            if n > 0 {
                info(format!("Removed {} previous demo entries.", n));
            }
        }

        let store = HistoryProvider::RandomDemo { seed }.load(today)?;
        for entry in store.entries() {
            insert_log(&pool.conn, entry)?;
        }

        let _ = audit(
            &pool.conn,
            "demo",
            &format!("seed {}", seed),
            &format!("Seeded {} demo entries", store.len()),
        );

        success(format!(
            "Seeded {} demo entries over 7 days (seed {}).",
            store.len(),
            seed
        ));
    }

    Ok(())
}
