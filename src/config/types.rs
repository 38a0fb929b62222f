//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Palette settings.
///
/// Controls how many swatches are generated and how the grid is laid out.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    /// Number of swatches generated at startup (valid range: 1 - 1024)
    #[serde(default = "default_count")]
    pub count: usize,

    /// Swatches per row (valid range: 1 - 64)
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Swatch edge length in pixels (valid range: 8 - 256)
    #[serde(default = "default_swatch_size")]
    pub swatch_size: i32,

    /// Space between neighbouring swatches in pixels (valid range: 0 - 64)
    #[serde(default = "default_gap")]
    pub gap: i32,

    /// Container padding around the grid in pixels (valid range: 0 - 128)
    #[serde(default = "default_padding")]
    pub padding: i32,

    /// Fixed random seed for reproducible palettes; random when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            columns: default_columns(),
            swatch_size: default_swatch_size(),
            gap: default_gap(),
            padding: default_padding(),
            seed: None,
        }
    }
}

/// Output sink settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Font family for the "Selected color" line (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Font size in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Height of the output area in pixels (valid range: 16 - 256)
    #[serde(default = "default_output_height")]
    pub height: i32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
            height: default_output_height(),
        }
    }
}

/// Snapshot and preview colors.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RenderConfig {
    /// Page background behind the palette
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Fill of the palette container (visible in the padding and gaps)
    #[serde(default = "default_container_background")]
    pub container_background: ColorSpec,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            container_background: default_container_background(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_count() -> usize {
    60
}

fn default_columns() -> u32 {
    10
}

fn default_swatch_size() -> i32 {
    40
}

fn default_gap() -> i32 {
    4
}

fn default_padding() -> i32 {
    12
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "bold".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    20.0
}

fn default_output_height() -> i32 {
    48
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_container_background() -> ColorSpec {
    ColorSpec::Name("lightgray".to_string())
}
