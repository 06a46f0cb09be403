/// Advisor configuration, persisted as TOML (`advisor.toml`) in a config directory.
///
/// Every field has a serde default, so a partial file (or no file at all)
/// yields a usable configuration.
///
/// NOTE: `reference_date` pins the evaluation date for every report. Leave it
/// unset in normal use; it exists for reproducible runs and demos.
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "advisor.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory for the daily rolling log file. Empty = log to stderr only.
    #[serde(default)]
    pub log_dir: PathBuf,

    /// tracing-subscriber directive added on top of RUST_LOG.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Pretty-print JSON output.
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,

    /// Fixed evaluation date instead of today.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

fn default_log_filter() -> String { "maintenance_advisor_lib=info".to_owned() }

fn default_pretty_output() -> bool { true }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir:        PathBuf::new(),
            log_filter:     default_log_filter(),
            pretty_output:  default_pretty_output(),
            reference_date: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

pub fn load_or_default(config_dir: &Path) -> Result<AppConfig> {
    let path = config_dir.join(CONFIG_FILE);
    if path.exists() {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Reading {}", path.display()))?;
        let cfg: AppConfig = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Config parse error in {}: {}", path.display(), e))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn save(config: &AppConfig, config_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(config_dir)?;
    let raw = toml::to_string_pretty(config)
        .map_err(|e| anyhow::anyhow!("Config serialize error: {}", e))?;
    std::fs::write(config_dir.join(CONFIG_FILE), raw)?;
    Ok(())
}
