//! Input handling.
//!
//! This module translates pointer presses at surface coordinates into click
//! events on the element tree. It owns the page (document, listeners and the
//! palette widget) and tracks whether a redraw is needed.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::MouseButton;
pub use state::InputState;
