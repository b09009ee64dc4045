use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::color::Rgba;
use crate::types::TipError;

pub const DEFAULT_INITIAL_TIP_PERCENT: u32 = 15;
pub const DEFAULT_SLIDER_MAX: u32 = 100;

/// Presentation constants consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipConfig {
    /// Slider position shown when the screen opens.
    pub initial_tip_percent: u32,
    /// Upper bound of the tip slider; also the denominator of the color blend.
    pub slider_max: u32,
    /// Label color at 0%.
    pub worst_tip_color: Rgba,
    /// Label color at `slider_max`.
    pub best_tip_color: Rgba,
}

impl Default for TipConfig {
    fn default() -> Self {
        TipConfig {
            initial_tip_percent: DEFAULT_INITIAL_TIP_PERCENT,
            slider_max: DEFAULT_SLIDER_MAX,
            worst_tip_color: Rgba::RED,
            best_tip_color: Rgba::GREEN,
        }
    }
}

impl std::str::FromStr for TipConfig {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: TipConfig = serde_json::from_str(s)
            .map_err(|e| TipError::configuration(format!("Failed to parse config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

impl TipConfig {
    pub fn builder() -> TipConfigBuilder {
        TipConfigBuilder::default()
    }

    /// Validates the configuration for logical consistency.
    pub fn validate(&self) -> Result<(), TipError> {
        if self.slider_max == 0 {
            return Err(TipError::configuration("Slider max must be greater than 0").with_source("slider_max"));
        }
        if self.initial_tip_percent > self.slider_max {
            return Err(TipError::configuration(format!(
                "Initial tip percent {} exceeds slider max {}",
                self.initial_tip_percent, self.slider_max
            ))
            .with_source("initial_tip_percent"));
        }
        Ok(())
    }

    /// Loads configuration from `TIPPY_*` environment variables.
    ///
    /// Unset variables keep their defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self, TipError> {
        let mut builder = TipConfig::builder();

        if let Ok(v) = env::var("TIPPY_INITIAL_TIP_PERCENT") {
            builder = builder.initial_tip_percent(parse_env_u32("TIPPY_INITIAL_TIP_PERCENT", &v)?);
        }
        if let Ok(v) = env::var("TIPPY_SLIDER_MAX") {
            builder = builder.slider_max(parse_env_u32("TIPPY_SLIDER_MAX", &v)?);
        }
        if let Ok(v) = env::var("TIPPY_WORST_TIP_COLOR") {
            builder = builder.worst_tip_color(v.parse::<Rgba>().map_err(|e| e.with_source("TIPPY_WORST_TIP_COLOR"))?);
        }
        if let Ok(v) = env::var("TIPPY_BEST_TIP_COLOR") {
            builder = builder.best_tip_color(v.parse::<Rgba>().map_err(|e| e.with_source("TIPPY_BEST_TIP_COLOR"))?);
        }

        builder.build()
    }

    /// Loads configuration from a JSON file.
    pub fn try_from_json(path: &str) -> Result<Self, TipError> {
        let content = fs::read_to_string(path)
            .map_err(|e| TipError::configuration(format!("Failed to read config file: {}", e)).with_source(path))?;
        content.parse()
    }

    // ========== Fluent Helper Methods ==========

    pub fn with_initial_tip_percent(mut self, percent: u32) -> Self {
        self.initial_tip_percent = percent;
        self
    }

    pub fn with_slider_max(mut self, max: u32) -> Self {
        self.slider_max = max;
        self
    }

    pub fn with_colors(mut self, worst: Rgba, best: Rgba) -> Self {
        self.worst_tip_color = worst;
        self.best_tip_color = best;
        self
    }

    /// Clamps a raw slider value into `[0, slider_max]`.
    pub fn clamp_percent(&self, percent: i64) -> u32 {
        percent.clamp(0, i64::from(self.slider_max)) as u32
    }
}

fn parse_env_u32(name: &str, value: &str) -> Result<u32, TipError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| TipError::configuration(format!("Invalid value {:?}: {}", value, e)).with_source(name))
}

// ========== TipConfigBuilder ==========

#[derive(Debug, Default)]
pub struct TipConfigBuilder {
    initial_tip_percent: Option<u32>,
    slider_max: Option<u32>,
    worst_tip_color: Option<Rgba>,
    best_tip_color: Option<Rgba>,
}

impl TipConfigBuilder {
    pub fn initial_tip_percent(mut self, percent: u32) -> Self {
        self.initial_tip_percent = Some(percent);
        self
    }

    pub fn slider_max(mut self, max: u32) -> Self {
        self.slider_max = Some(max);
        self
    }

    pub fn worst_tip_color(mut self, color: Rgba) -> Self {
        self.worst_tip_color = Some(color);
        self
    }

    pub fn best_tip_color(mut self, color: Rgba) -> Self {
        self.best_tip_color = Some(color);
        self
    }

    pub fn build(self) -> Result<TipConfig, TipError> {
        let defaults = TipConfig::default();
        let config = TipConfig {
            initial_tip_percent: self.initial_tip_percent.unwrap_or(defaults.initial_tip_percent),
            slider_max: self.slider_max.unwrap_or(defaults.slider_max),
            worst_tip_color: self.worst_tip_color.unwrap_or(defaults.worst_tip_color),
            best_tip_color: self.best_tip_color.unwrap_or(defaults.best_tip_color),
        };
        config.validate()?;
        Ok(config)
    }
}
