//! Persistent CLI Configuration Loader
//!
//! Configuration is loaded from `~/.config/tippy/config.toml` on Linux,
//! `~/Library/Application Support/tippy/config.toml` on macOS
//! or `%APPDATA%\tippy\config.toml` on Windows.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tippy::{Rgba, TipConfig, TipError};
use tracing::{debug, warn};

/// CLI Configuration structure loaded from TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Slider position when the calculator opens.
    pub initial_tip_percent: Option<u32>,
    /// Maximum tip percent selectable on the slider.
    pub slider_max: Option<u32>,
    /// Rating color at 0% (e.g. "#E53935").
    pub worst_tip_color: Option<Rgba>,
    /// Rating color at the slider maximum (e.g. "#43A047").
    pub best_tip_color: Option<Rgba>,
    /// Enable file logging by default.
    pub enable_logging: Option<bool>,
}

impl CliConfig {
    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tippy"))
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Loads the default config file, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            debug!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Loads a config file from an explicit path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file found at {:?}", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<CliConfig>(&content) {
                Ok(config) => {
                    debug!("Loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Writes the configuration as pretty TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(path, content)?;
        debug!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Sample configuration holding the built-in defaults.
    pub fn sample() -> Self {
        let defaults = TipConfig::default();
        CliConfig {
            initial_tip_percent: Some(defaults.initial_tip_percent),
            slider_max: Some(defaults.slider_max),
            worst_tip_color: Some(defaults.worst_tip_color),
            best_tip_color: Some(defaults.best_tip_color),
            enable_logging: Some(false),
        }
    }

    /// Creates a sample configuration file at the default location.
    pub fn create_sample() -> Result<PathBuf, std::io::Error> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Could not determine config directory")
        })?;
        Self::sample().save_to(&path)?;
        Ok(path)
    }

    /// Fills unset fields from `other`; values already set here win.
    pub fn or(self, other: CliConfig) -> CliConfig {
        CliConfig {
            initial_tip_percent: self.initial_tip_percent.or(other.initial_tip_percent),
            slider_max: self.slider_max.or(other.slider_max),
            worst_tip_color: self.worst_tip_color.or(other.worst_tip_color),
            best_tip_color: self.best_tip_color.or(other.best_tip_color),
            enable_logging: self.enable_logging.or(other.enable_logging),
        }
    }

    /// Builds the engine configuration; unset fields take the built-in defaults.
    pub fn to_tip_config(&self) -> Result<TipConfig, TipError> {
        let mut builder = TipConfig::builder();
        if let Some(p) = self.initial_tip_percent {
            builder = builder.initial_tip_percent(p);
        }
        if let Some(max) = self.slider_max {
            builder = builder.slider_max(max);
        }
        if let Some(c) = self.worst_tip_color {
            builder = builder.worst_tip_color(c);
        }
        if let Some(c) = self.best_tip_color {
            builder = builder.best_tip_color(c);
        }
        builder.build()
    }
}
