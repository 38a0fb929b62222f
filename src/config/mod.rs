//! Configuration file support for swatchboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/swatchboard/config.toml`. Settings include the palette grid,
//! the output sink font and the render colors.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{OutputConfig, PaletteConfig, RenderConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [palette]
/// count = 60
/// columns = 10
/// swatch_size = 40
/// gap = 4
/// padding = 12
///
/// [output]
/// font_family = "Sans"
/// font_weight = "bold"
/// font_style = "normal"
/// font_size = 20.0
///
/// [render]
/// background = "white"
/// container_background = [235, 235, 235]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Palette size and grid geometry
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Output sink appearance
    #[serde(default)]
    pub output: OutputConfig,

    /// Preview and snapshot colors
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `palette.count`: 1 - 1024
    /// - `palette.columns`: 1 - 64
    /// - `palette.swatch_size`: 8 - 256
    /// - `palette.gap`: 0 - 64
    /// - `palette.padding`: 0 - 128
    /// - `output.font_size`: 8.0 - 72.0
    /// - `output.height`: 16 - 256
    pub fn validate_and_clamp(&mut self) {
        // Swatch count: 1 - 1024
        if !(1..=1024).contains(&self.palette.count) {
            log::warn!(
                "Invalid palette count {}, clamping to 1-1024 range",
                self.palette.count
            );
            self.palette.count = self.palette.count.clamp(1, 1024);
        }

        // Columns: 1 - 64
        if !(1..=64).contains(&self.palette.columns) {
            log::warn!(
                "Invalid palette columns {}, clamping to 1-64 range",
                self.palette.columns
            );
            self.palette.columns = self.palette.columns.clamp(1, 64);
        }

        // Swatch size: 8 - 256
        if !(8..=256).contains(&self.palette.swatch_size) {
            log::warn!(
                "Invalid swatch_size {}, clamping to 8-256 range",
                self.palette.swatch_size
            );
            self.palette.swatch_size = self.palette.swatch_size.clamp(8, 256);
        }

        // Gap: 0 - 64
        if !(0..=64).contains(&self.palette.gap) {
            log::warn!("Invalid gap {}, clamping to 0-64 range", self.palette.gap);
            self.palette.gap = self.palette.gap.clamp(0, 64);
        }

        // Padding: 0 - 128
        if !(0..=128).contains(&self.palette.padding) {
            log::warn!(
                "Invalid padding {}, clamping to 0-128 range",
                self.palette.padding
            );
            self.palette.padding = self.palette.padding.clamp(0, 128);
        }

        // Font size: 8.0 - 72.0
        if !(8.0..=72.0).contains(&self.output.font_size) {
            log::warn!(
                "Invalid output font_size {:.1}, clamping to 8.0-72.0 range",
                self.output.font_size
            );
            self.output.font_size = self.output.font_size.clamp(8.0, 72.0);
        }

        // Output height: 16 - 256
        if !(16..=256).contains(&self.output.height) {
            log::warn!(
                "Invalid output height {}, clamping to 16-256 range",
                self.output.height
            );
            self.output.height = self.output.height.clamp(16, 256);
        }

        if self.output.font_family.trim().is_empty() {
            log::warn!("Empty output font_family, falling back to 'Sans'");
            self.output.font_family = "Sans".to_string();
        }
        if self.output.font_weight.trim().is_empty() {
            log::warn!("Empty output font_weight, falling back to 'bold'");
            self.output.font_weight = "bold".to_string();
        }
        if self.output.font_style.trim().is_empty() {
            log::warn!("Empty output font_style, falling back to 'normal'");
            self.output.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/swatchboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("swatchboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
