//! Utility functions for color names and command-line parsing.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Names
// ============================================================================

/// Maps a color name to a predefined [`Color`].
///
/// Matching is case-insensitive. Returns `None` for unknown names.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "lightgray" | "lightgrey" => Some(LIGHT_GRAY),
        _ => None,
    }
}

// ============================================================================
// Argument Parsing
// ============================================================================

/// Parses an `X,Y` pixel coordinate pair.
///
/// Used as a clap value parser, hence the `String` error.
pub fn parse_point(value: &str) -> Result<(i32, i32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate '{}': {e}", part.trim()))
    };
    Ok((parse(x)?, parse(y)?))
}
