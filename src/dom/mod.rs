//! Retained element tree with browser-style event propagation.
//!
//! This module provides the host environment the palette widget runs in:
//! - [`Document`]: arena of [`Element`]s with hit testing and simple selectors
//! - [`Event`]: an in-flight event with `target`, `current_target` and phase
//! - [`Dispatcher`]: listener registry running capture, target and bubble phases

pub mod dispatch;
pub mod document;
pub mod event;
pub mod node;

// Re-export commonly used types at module level
pub use dispatch::{DispatchReport, DispatchStep, Dispatcher, ListenerId, ListenerOptions};
pub use document::{Document, DomError};
pub use event::{Event, EventType, Phase};
pub use node::{Element, ElementKind, NodeId, Rect, Style};
