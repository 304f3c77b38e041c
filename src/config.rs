//! Configuration management for the layout engine.
//!
//! This module handles loading, validating, and saving configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::APP_CONFIG_DIR;
use crate::models::CanvasBounds;

/// Default kitchen footprint for new layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Default length in grid units (x axis)
    pub default_length: u32,
    /// Default width in grid units (y axis)
    pub default_width: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_length: 20,
            default_width: 15,
        }
    }
}

impl CanvasConfig {
    /// Default bounds as a validated `CanvasBounds`.
    pub fn default_bounds(&self) -> Result<CanvasBounds> {
        CanvasBounds::new(self.default_length, self.default_width)
    }
}

/// Pointer interaction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Canvas pixels per grid unit at scale 1.0
    #[serde(default = "default_grid_unit_px")]
    pub grid_unit_px: f64,
}

fn default_grid_unit_px() -> f64 {
    40.0
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            grid_unit_px: default_grid_unit_px(),
        }
    }
}

/// AI auto-layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoLayoutConfig {
    /// Credits deducted per auto-layout request
    pub credit_cost: u32,
    /// Seconds to wait for the generation collaborator
    pub timeout_secs: u64,
}

impl Default for AutoLayoutConfig {
    fn default() -> Self {
        Self {
            credit_cost: 1,
            timeout_secs: 90,
        }
    }
}

impl AutoLayoutConfig {
    /// Timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON catalog replacing the embedded one
    pub path: Option<PathBuf>,
}

/// Engine configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KitchenPlanner/config.toml`
/// - macOS: `~/Library/Application Support/KitchenPlanner/config.toml`
/// - Windows: `%APPDATA%\KitchenPlanner\config.toml`
///
/// # Validation
///
/// - canvas defaults must be at least 1x1
/// - `grid_unit_px` must be a positive finite number
/// - `timeout_secs` must be positive
/// - catalog `path`, if set, must exist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default canvas
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Pointer interaction
    #[serde(default)]
    pub interaction: InteractionConfig,
    /// AI auto-layout
    #[serde(default)]
    pub auto_layout: AutoLayoutConfig,
    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path, defaulting when missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the platform config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using temp file + rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.canvas
            .default_bounds()
            .context("Invalid [canvas] defaults")?;

        let px = self.interaction.grid_unit_px;
        if !px.is_finite() || px <= 0.0 {
            anyhow::bail!("[interaction] grid_unit_px must be a positive number (got {px})");
        }

        if self.auto_layout.timeout_secs == 0 {
            anyhow::bail!("[auto_layout] timeout_secs must be greater than 0");
        }

        if let Some(path) = &self.catalog.path {
            if !path.exists() {
                anyhow::bail!("Catalog file does not exist: {}", path.display());
            }
        }

        Ok(())
    }
}
