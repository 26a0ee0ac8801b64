//! CLI argument definitions for the moviedb binary.
//!
//! Uses `clap` with derive macros. None of the flags are required; the menu
//! is the real interface. Priority resolution: CLI args > env vars > config
//! file > defaults.

use clap::Parser;
use std::path::PathBuf;

use moviedb_core::config::MovieDbConfig;

/// moviedb: a personal movie catalog in your terminal.
#[derive(Parser, Debug)]
#[command(name = "moviedb", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database file.
    #[arg(long = "db")]
    pub db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > MOVIEDB_CONFIG env var > ~/.moviedb/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("MOVIEDB_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Whether the config file was named explicitly, in which case failing to
    /// load it is fatal.
    pub fn config_is_explicit(&self) -> bool {
        self.config.is_some() || std::env::var_os("MOVIEDB_CONFIG").is_some()
    }

    /// Resolve the database path.
    ///
    /// Priority: --db flag > config `general.data_dir` + `storage.db_file`.
    pub fn resolve_db_path(&self, config: &MovieDbConfig) -> PathBuf {
        self.db
            .clone()
            .unwrap_or_else(|| config.database_path())
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config: &MovieDbConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.general.log_level.clone())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".moviedb").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".moviedb").join("config.toml");
    }
    PathBuf::from("config.toml")
}
