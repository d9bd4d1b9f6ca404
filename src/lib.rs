//! splish library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Activities => cli::commands::activities::handle(),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Remove { .. } => cli::commands::remove::handle(&cli.command, cfg),
        Commands::Today { .. } => cli::commands::today::handle(&cli.command, cfg),
        Commands::Week => cli::commands::week::handle(cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::Demo { .. } => cli::commands::demo::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE
    let mut cfg = Config::load()?;

    // 3️⃣ apply a database override from the command line, if any
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
