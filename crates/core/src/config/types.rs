use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub watcher: WatcherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Root for all state: registry database and vault live under it
    /// unless overridden below.
    pub data_dir: String,
    /// Optional override for the registry database file
    /// (defaults to {{data_dir}}/registry.db).
    pub db_path: Option<String>,
    /// Optional override for the snapshot vault directory
    /// (defaults to {{data_dir}}/vault).
    pub vault_dir: Option<String>,
}

/// Tuning for the watch daemon. Every field has a sensible default so the
/// whole [watcher] table can be omitted.
#[derive(Debug, Deserialize, Clone)]
pub struct WatcherConfig {
    /// Quiet window before a path reported by the OS is processed.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// How often the active folder list is re-read from the registry.
    #[serde(default = "default_config_poll_secs")]
    pub config_poll_secs: u64,
    /// Delay between size/mtime probes when checking a file has settled.
    #[serde(default = "default_stability_interval_ms")]
    pub stability_interval_ms: u64,
    /// Consecutive identical probes required before a file counts as settled.
    #[serde(default = "default_stability_checks")]
    pub stability_checks: u32,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            config_poll_secs: default_config_poll_secs(),
            stability_interval_ms: default_stability_interval_ms(),
            stability_checks: default_stability_checks(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    1500
}

fn default_config_poll_secs() -> u64 {
    30
}

fn default_stability_interval_ms() -> u64 {
    250
}

fn default_stability_checks() -> u32 {
    2
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub vault_dir: PathBuf,
    pub watcher: WatcherConfig,
    pub logging: LoggingConfig,
}
