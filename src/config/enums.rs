//! Configuration enum types.

use crate::draw::{Color, HexColor, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// background = "white"
///
/// # Hex color
/// background = "#1e1e2e"
///
/// # Custom RGB color (0-255 per component)
/// background = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, white, black, lightgray) or `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names default to white with a warning. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => name
                .parse::<HexColor>()
                .map(HexColor::to_color)
                .ok()
                .or_else(|| crate::util::name_to_color(name))
                .unwrap_or_else(|| {
                    warn!("Unknown color '{}', using white", name);
                    WHITE
                }),
            ColorSpec::Rgb([r, g, b]) => HexColor::new(*r, *g, *b).to_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_hex_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("Black".into()).to_color(), BLACK);
        assert_eq!(ColorSpec::Name("#ff0000".into()).to_color(), RED);
        assert_eq!(ColorSpec::Rgb([0, 0, 255]).to_color(), BLUE);
    }

    #[test]
    fn unknown_names_fall_back_to_white() {
        assert_eq!(ColorSpec::Name("chartreuse".into()).to_color(), WHITE);
    }
}
