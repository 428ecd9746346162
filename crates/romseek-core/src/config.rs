use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assemble::DEFAULT_CAP;
use crate::platform::Platform;
use crate::size::{SizeGate, DEFAULT_MAX_MIB};

fn default_max_results() -> usize {
    DEFAULT_CAP
}

fn default_max_mib() -> f64 {
    DEFAULT_MAX_MIB
}

/// Global configuration loaded from `~/.config/romseek/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RomseekConfig {
    /// Maximum number of results returned per query.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Entries listed in MiB above this size are excluded; GiB entries always are.
    #[serde(default = "default_max_mib")]
    pub max_mib: f64,
    /// Root URL of the file repository (platform listings live below it).
    #[serde(default)]
    pub repository_root: Option<String>,
    /// Platform used when a command does not name one.
    #[serde(default)]
    pub default_platform: Option<Platform>,
}

impl Default for RomseekConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_CAP,
            max_mib: DEFAULT_MAX_MIB,
            repository_root: None,
            default_platform: None,
        }
    }
}

impl RomseekConfig {
    pub fn size_gate(&self) -> SizeGate {
        SizeGate::new(self.max_mib)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("romseek")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RomseekConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RomseekConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<RomseekConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: RomseekConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
