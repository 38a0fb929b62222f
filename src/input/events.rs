//! Generic input event types.

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary button, produces clicks)
    Left,
    /// Right mouse button (currently unused)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
