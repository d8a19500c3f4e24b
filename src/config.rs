use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding `galleryConfig.json`, `siteConfig.json` and `public/`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_true")]
    pub image_preview_enabled: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    #[serde(default = "default_preview_max_items")]
    pub preview_max_items: usize,
    /// Base URL that site paths are joined onto instead of `<data_dir>/public`
    #[serde(default)]
    pub image_base_url: Option<String>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

fn default_preview_max_items() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            vim_mode: false,
            image_preview_enabled: true,
            image_protocol: default_image_protocol(),
            preview_max_items: default_preview_max_items(),
            image_base_url: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit `--config` path must exist. Otherwise the platform config dir
/// is tried, then `./config.yaml`; `None` means run with defaults.
pub fn get_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/festui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("festui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
