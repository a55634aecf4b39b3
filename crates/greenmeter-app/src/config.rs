//! Configuration management for green-meter
//!
//! Config stored at: ~/.config/green-meter/config.json

use greenmeter_domain::model::{ActivityInputs, AdjustmentParameters, Lever};
use greenmeter_domain::service::check_step;
use greenmeter_types::{format_grouped, ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Activity values used when no scenario or flag sets them
    #[serde(default)]
    pub activity: ActivityInputs,

    /// Default slider positions
    #[serde(default)]
    pub adjustments: AdjustmentParameters,

    /// Default sweep step in percent
    #[serde(default = "default_sweep_step")]
    pub sweep_step: f64,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_sweep_step() -> f64 {
    10.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            activity: ActivityInputs::default(),
            adjustments: AdjustmentParameters::default(),
            sweep_step: default_sweep_step(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("green-meter");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config
            .adjustments
            .check_range()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        check_step(config.sweep_step).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Green Meter Configuration")?;
        writeln!(f, "=========================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Sweep step:     {}%", self.sweep_step)?;
        writeln!(
            f,
            "Config file:    {}",
            Self::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(unavailable)".to_string())
        )?;
        writeln!(f)?;
        writeln!(f, "Adjustments:")?;
        for lever in Lever::ALL {
            writeln!(f, "  {:<28}{:.0}", format!("{}:", lever.label()), self.adjustments.get(lever))?;
        }
        writeln!(f)?;
        writeln!(f, "Activity defaults:")?;
        for category in greenmeter_domain::model::Category::ALL {
            writeln!(
                f,
                "  {:<42}{}",
                format!("{}:", category.input_label()),
                format_grouped(self.activity.get(category), 0)
            )?;
        }
        Ok(())
    }
}
