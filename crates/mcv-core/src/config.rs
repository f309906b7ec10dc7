use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/mcv/config.toml`.
///
/// Transport knobs only; convention selection and the skip-on-absence policy
/// are fixed behavior, not configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McvConfig {
    /// Connect timeout for mirror requests, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout for mirror requests, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for McvConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mcv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<McvConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = McvConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: McvConfig = toml::from_str(&data)?;
    Ok(cfg)
}
