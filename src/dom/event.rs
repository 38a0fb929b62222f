//! Event objects passed to listeners during dispatch.

use super::node::NodeId;

/// Event types the dispatcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Pointer click (primary button)
    Click,
    /// Element gained focus (does not bubble)
    Focus,
    /// Element lost focus (does not bubble)
    Blur,
    /// Bubbling counterpart of [`EventType::Focus`]
    FocusIn,
    /// Bubbling counterpart of [`EventType::Blur`]
    FocusOut,
}

impl EventType {
    /// Whether the event takes part in the bubbling phase.
    ///
    /// Capture listeners still see non-bubbling events on the way down.
    pub fn bubbles(self) -> bool {
        !matches!(self, EventType::Focus | EventType::Blur)
    }

    pub fn name(self) -> &'static str {
        match self {
            EventType::Click => "click",
            EventType::Focus => "focus",
            EventType::Blur => "blur",
            EventType::FocusIn => "focusin",
            EventType::FocusOut => "focusout",
        }
    }
}

/// Propagation phase an event is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Not being dispatched
    None,
    /// Travelling from the root down toward the target
    Capturing,
    /// Delivered to the target itself
    AtTarget,
    /// Travelling from the target's parent back up to the root
    Bubbling,
}

/// A dispatched event.
///
/// `target` is fixed for the whole dispatch: it is the innermost element the
/// event happened on. `current_target` changes as the event travels and
/// names the element whose listeners are running right now.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    kind: EventType,
    target: NodeId,
    current_target: Option<NodeId>,
    phase: Phase,
    position: Option<(i32, i32)>,
    propagation_stopped: bool,
    immediate_propagation_stopped: bool,
}

impl Event {
    pub fn new(kind: EventType, target: NodeId) -> Self {
        Self {
            kind,
            target,
            current_target: None,
            phase: Phase::None,
            position: None,
            propagation_stopped: false,
            immediate_propagation_stopped: false,
        }
    }

    /// A click at surface coordinates.
    pub fn click_at(target: NodeId, x: i32, y: i32) -> Self {
        Self {
            position: Some((x, y)),
            ..Self::new(EventType::Click, target)
        }
    }

    pub fn kind(&self) -> EventType {
        self.kind
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn current_target(&self) -> Option<NodeId> {
        self.current_target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        self.position
    }

    pub fn bubbles(&self) -> bool {
        self.kind.bubbles()
    }

    /// Lets the remaining listeners on the current element run, then stops.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Stops right after the current listener returns.
    pub fn stop_immediate_propagation(&mut self) {
        self.propagation_stopped = true;
        self.immediate_propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped
    }

    pub(crate) fn enter(&mut self, node: NodeId, phase: Phase) {
        self.current_target = Some(node);
        self.phase = phase;
    }

    pub(crate) fn finish(&mut self) {
        self.current_target = None;
        self.phase = Phase::None;
    }
}
