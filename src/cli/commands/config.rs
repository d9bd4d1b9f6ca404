use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("📄 {}\n", path.display());
                println!("{content}");
            } else {
                info(format!(
                    "No config file at {} — using built-in defaults.",
                    path.display()
                ));
            }
        }

        if *check {
            cfg.validate()?;
            success(format!(
                "Configuration is valid (budget: {} gallons/day, database: {}).",
                cfg.daily_budget_gallons, cfg.database
            ));
        }
    }

    Ok(())
}
