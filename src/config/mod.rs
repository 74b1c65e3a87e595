use crate::errors::{AppError, AppResult};
use crate::models::strategy::WriteOffStrategy;
use crate::utils::path::{database_in, expand_tilde};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_tracker_database")]
    pub tracker_database: String,
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_daily_capacity")]
    pub daily_capacity: u32,
    #[serde(default)]
    pub strategy: WriteOffStrategy,
    #[serde(default = "default_set_active")]
    pub set_active_on_write: bool,
}

fn default_tracker_database() -> String {
    Config::config_dir()
        .join("tracker.sqlite")
        .to_string_lossy()
        .to_string()
}
fn default_user_name() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "me".to_string())
}
fn default_daily_capacity() -> u32 {
    7
}
fn default_set_active() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            tracker_database: default_tracker_database(),
            user_name: default_user_name(),
            daily_capacity: default_daily_capacity(),
            strategy: WriteOffStrategy::default(),
            set_active_on_write: default_set_active(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rwriteoff")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rwriteoff")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rwriteoff.conf")
    }

    /// Return the default path of the state database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rwriteoff.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// State database path with `~` expanded.
    pub fn database_path(&self) -> String {
        expand_tilde(&self.database).to_string_lossy().to_string()
    }

    /// Tracker database path with `~` expanded.
    pub fn tracker_path(&self) -> String {
        expand_tilde(&self.tracker_database)
            .to_string_lossy()
            .to_string()
    }

    /// Resolve a database name given on `init` against the config directory.
    fn resolve_in_config_dir(name: &str) -> String {
        database_in(&Self::config_dir(), name)
            .to_string_lossy()
            .to_string()
    }

    /// Initialize configuration and database files
    pub fn init_all(
        custom_db: Option<&str>,
        custom_tracker: Option<&str>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::default();
        if let Some(name) = custom_db {
            config.database = Self::resolve_in_config_dir(name);
        }
        if let Some(name) = custom_tracker {
            config.tracker_database = Self::resolve_in_config_dir(name);
        }

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        for db in [config.database_path(), config.tracker_path()] {
            let p = Path::new(&db);
            if let Some(parent) = p.parent() {
                fs::create_dir_all(parent)?;
            }
            if !p.exists() {
                fs::File::create(p)?;
            }
        }

        println!("✅ Database:    {}", config.database_path());
        println!("✅ Tracker:     {}", config.tracker_path());

        Ok(config)
    }
}
