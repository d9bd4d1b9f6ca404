use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_DAILY_BUDGET_GALLONS: u32 = 80;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_daily_budget")]
    pub daily_budget_gallons: u32,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_daily_budget() -> u32 {
    DEFAULT_DAILY_BUDGET_GALLONS
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            daily_budget_gallons: default_daily_budget(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("splish")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".splish")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("splish.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("splish.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// The loaded budget is validated before it reaches any evaluation.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?
        } else {
            Config::default()
        };

        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations the budget evaluator cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.daily_budget_gallons == 0 {
            return Err(AppError::Config(
                "daily_budget_gallons must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("splish.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            daily_budget_gallons: default_daily_budget(),
            separator_char: default_separator_char(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
