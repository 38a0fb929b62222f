//! Library exports for the swatchboard palette.
//!
//! Exposes the element tree, event dispatch and the palette widget alongside
//! configuration and rendering helpers so the binary and integration tests
//! share the same code paths.

pub mod config;
pub mod demo;
pub mod dom;
pub mod draw;
pub mod input;
pub mod palette;
pub mod ui;
pub mod util;

pub use config::Config;
pub use palette::{PaletteError, PaletteWidget};
