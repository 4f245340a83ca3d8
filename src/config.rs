use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Viewer configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
    /// Base URL that relative sources are fetched from
    #[serde(default)]
    pub base_url: Option<String>,
    /// Directory that relative source paths are read from
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Command that receives copied text on stdin
    #[serde(default)]
    pub clipboard_command: Option<String>,
    /// Command used to open links
    #[serde(default)]
    pub open_command: Option<String>,
    #[serde(default)]
    pub vim_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            base_url: None,
            data_dir: None,
            clipboard_command: None,
            open_command: None,
            vim_mode: false,
        }
    }
}

fn default_sources() -> Vec<String> {
    [
        "dataset_crawler-google-places_2026-02-26_11-26-44-141.json",
        "dentist.json",
        "interiordesign.json",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Determine the config file path with fallback logic.
///
/// An explicit path must exist. Otherwise the platform config dir is tried,
/// then `./config.yaml`. `None` means no config file: use defaults.
pub fn get_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/leadview/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("leadview").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
