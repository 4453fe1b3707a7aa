use crate::output::ColorMode;
use crate::search::SearchConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "nfind";
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "NFIND_CONFIG";

/// Application configuration stored in the user's config directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default engine settings, overridden by command-line flags
    #[serde(default)]
    pub search: SearchConfig,

    /// Default colour mode for terminal output
    #[serde(default)]
    pub color: ColorMode,
}

impl AppConfig {
    /// Load config from `path`, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}

/// Get the path to the config file.
/// `NFIND_CONFIG` wins over the platform config directory.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// Get the application config directory
pub fn get_config_dir() -> Result<PathBuf> {
    // XDG_CONFIG_HOME or ~/.config on Linux, Application Support on macOS,
    // %APPDATA% on Windows
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}
