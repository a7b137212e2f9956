use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

use crate::{aggregate::TimeRange, provider::SampleWindow, theme::ThemeMode};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// time_range = 5
/// theme_mode = "dark"
/// forecast_samples = 24
/// default_location = "Tunis"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,

    #[serde(default)]
    pub time_range: TimeRange,

    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// Samples the hourly view starts with (1..=40); daily summaries always fetch all 40.
    #[serde(default = "default_forecast_samples")]
    pub forecast_samples: u32,

    /// Used when a command is given no place.
    pub default_location: Option<String>,
}

fn default_forecast_samples() -> u32 {
    SampleWindow::INITIAL
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            time_range: TimeRange::default(),
            theme_mode: ThemeMode::default(),
            forecast_samples: default_forecast_samples(),
            default_location: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents).with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml).with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "meteo", "meteo")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        let trimmed = api_key.trim();
        self.api_key = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    /// API key from the environment, falling back to the stored one.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key_with_override(env::var(API_KEY_ENV).ok())
    }

    pub(crate) fn api_key_with_override(&self, from_env: Option<String>) -> Option<String> {
        from_env
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.resolve_api_key().is_some()
    }

    pub fn sample_window(&self) -> SampleWindow {
        SampleWindow::new(self.forecast_samples)
    }
}
