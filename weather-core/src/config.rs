use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_ICON_BASE_URL: &str = "http://openweathermap.org/img/w";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// endpoint = "https://api.openweathermap.org/data/2.5/weather"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub icon_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from the platform config dir, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherlookup", "weatherlookup")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Returns the API key, or an error with a hint on how to set one.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weatherlookup configure`, pass --api-key or set OPENWEATHER_API_KEY."
            )
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn icon_base_url(&self) -> &str {
        self.icon_base_url.as_deref().unwrap_or(DEFAULT_ICON_BASE_URL)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Layer command-line overrides on top of the file values.
    pub fn with_overrides(mut self, api_key: Option<String>, endpoint: Option<String>) -> Self {
        if api_key.is_some() {
            self.api_key = api_key;
        }
        if endpoint.is_some() {
            self.endpoint = endpoint;
        }
        self
    }
}
