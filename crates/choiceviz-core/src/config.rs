use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::RenderFormat;

/// Endpoint used when neither the config file nor the command line names one.
pub const DEFAULT_ENDPOINT: &str =
    "https://humblechoicescrapper.onrender.com/api/HumbleChoice/GetMothlyGames";

/// Global configuration loaded from `~/.config/choiceviz/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoicevizConfig {
    /// Base URL of the bundle endpoint; query parameters are added per request.
    pub endpoint: String,
    /// Connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_true")]
    pub follow_redirects: bool,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub default_format: RenderFormat,
}

fn default_true() -> bool {
    true
}

impl Default for ChoicevizConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: None,
            timeout_secs: None,
            follow_redirects: true,
            user_agent: None,
            default_format: RenderFormat::Text,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("choiceviz")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ChoicevizConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ChoicevizConfig::default();
        write_config(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<ChoicevizConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ChoicevizConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

pub fn write_config(path: &Path, cfg: &ChoicevizConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}
