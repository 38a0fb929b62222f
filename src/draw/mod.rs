//! Colors, fonts and Cairo-based rendering.
//!
//! This module defines the drawing types used to show the page:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`HexColor`]: the `#rrggbb` value swatches carry
//! - [`FontDescriptor`]: font used for the output sink text
//! - Rendering functions for Cairo-based output (`png` feature)

pub mod color;
pub mod font;
#[cfg(feature = "png")]
pub mod render;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError, HexColor};
pub use font::FontDescriptor;

#[cfg(feature = "png")]
pub use render::{render_page, write_png};
