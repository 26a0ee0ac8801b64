use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Environment variables checked for the OMDb API key, in priority order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["OMDB_API_KEY", "API_KEY"];

/// Top-level configuration for the movie catalog.
///
/// Loaded from `~/.moviedb/config.toml` by default. Every section is
/// optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDbConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl MovieDbConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MovieDbConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// The API key is the only secret; environment values win over the file.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in API_KEY_ENV_VARS {
            if let Some(key) = lookup(name).filter(|k| !k.trim().is_empty()) {
                self.lookup.api_key = Some(key.trim().to_string());
                return;
            }
        }
    }

    /// Full path of the SQLite database file, with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_home(&self.general.data_dir).join(&self.storage.db_file)
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory holding the database file.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.moviedb/data".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

/// Catalog store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file name inside `general.data_dir`.
    pub db_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_file: "movies.db".to_string(),
        }
    }
}

/// OMDb lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub base_url: String,
    /// API key. Usually supplied through `OMDB_API_KEY` rather than the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: "http://www.omdbapi.com".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

/// Static website export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// HTML template containing the grid placeholder.
    pub template_path: String,
    /// Where the generated page is written.
    pub output_path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            template_path: "index_template.html".to_string(),
            output_path: "index.html".to_string(),
        }
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}
