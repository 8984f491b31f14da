use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage_uri::{DefaultBucketUriClass, DEFAULT_GS_HOST, DEFAULT_S3_HOST};

/// Highest meaningful debug level.
pub const MAX_DEBUG_LEVEL: u8 = 3;

/// Provider endpoint hosts (optional `[endpoints]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Host for `gs://` handles (e.g. a local emulator as `localhost:4443`).
    pub gs_host: String,
    /// Host for `s3://` handles.
    pub s3_host: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            gs_host: DEFAULT_GS_HOST.to_string(),
            s3_host: DEFAULT_S3_HOST.to_string(),
        }
    }
}

impl EndpointConfig {
    /// Cloud handle implementation pointing at these hosts.
    pub fn bucket_class(&self) -> DefaultBucketUriClass {
        DefaultBucketUriClass::new(&self.gs_host, &self.s3_host)
    }
}

/// Global configuration loaded from `~/.config/gsuri/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GsuriConfig {
    /// Debug level used when `-D` is not given (0..=3).
    #[serde(default)]
    pub debug: u8,
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

impl GsuriConfig {
    /// Debug level from the command line if any, else from config; capped at
    /// [`MAX_DEBUG_LEVEL`].
    pub fn effective_debug(&self, cli_level: Option<u8>) -> u8 {
        cli_level.unwrap_or(self.debug).min(MAX_DEBUG_LEVEL)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gsuri")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GsuriConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GsuriConfig::default();
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
pub fn load_from(path: &Path) -> Result<GsuriConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: GsuriConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
