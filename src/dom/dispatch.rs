//! Listener registry and three-phase event dispatch.
//!
//! Dispatch follows the browser model:
//! 1. **Capturing**: capture listeners from the root down to the target's parent
//! 2. **At target**: the target's capture listeners, then its bubble listeners
//! 3. **Bubbling**: bubble listeners from the target's parent up to the root
//!    (skipped for events that don't bubble)
//!
//! The propagation path is computed once before any listener runs, so a
//! listener that restructures the tree does not change where the current
//! event goes.

use std::collections::HashMap;

use log::{debug, trace};

use super::document::Document;
use super::event::{Event, EventType, Phase};
use super::node::NodeId;

/// Listener callback. Receives the in-flight event and the document.
pub type Handler = Box<dyn FnMut(&mut Event, &mut Document)>;

/// Identifies a registered listener for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// Run during the capturing phase instead of bubbling
    pub capture: bool,
    /// Remove the listener after its first invocation
    pub once: bool,
}

impl ListenerOptions {
    pub fn capture() -> Self {
        Self {
            capture: true,
            ..Self::default()
        }
    }

    pub fn once() -> Self {
        Self {
            once: true,
            ..Self::default()
        }
    }
}

struct Registration {
    id: ListenerId,
    kind: EventType,
    options: ListenerOptions,
    handler: Handler,
}

/// One listener invocation recorded during dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStep {
    pub node: NodeId,
    pub phase: Phase,
    pub listener: ListenerId,
}

/// Summary of a finished dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Listener invocations in the order they happened
    pub steps: Vec<DispatchStep>,
    /// Whether some listener stopped propagation
    pub stopped: bool,
}

impl DispatchReport {
    pub fn handlers_invoked(&self) -> usize {
        self.steps.len()
    }
}

/// Holds event listeners keyed by the element they are registered on.
///
/// Kept separate from [`Document`] so listeners can borrow the tree mutably
/// while they run.
#[derive(Default)]
pub struct Dispatcher {
    listeners: HashMap<NodeId, Vec<Registration>>,
    next_id: u64,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<NodeId, usize> = self
            .listeners
            .iter()
            .map(|(node, regs)| (*node, regs.len()))
            .collect();
        f.debug_struct("Dispatcher")
            .field("listeners", &counts)
            .finish()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `kind` events on `node`.
    pub fn add_event_listener<F>(
        &mut self,
        node: NodeId,
        kind: EventType,
        options: ListenerOptions,
        handler: F,
    ) -> ListenerId
    where
        F: FnMut(&mut Event, &mut Document) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(node).or_default().push(Registration {
            id,
            kind,
            options,
            handler: Box::new(handler),
        });
        debug!(
            "Registered {} listener {:?} on {} (capture={}, once={})",
            kind.name(),
            id,
            node,
            options.capture,
            options.once
        );
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        for registrations in self.listeners.values_mut() {
            if let Some(pos) = registrations.iter().position(|r| r.id == id) {
                registrations.remove(pos);
                return true;
            }
        }
        false
    }

    /// Number of listeners (of any type) registered on `node`.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.get(&node).map_or(0, Vec::len)
    }

    /// Total number of listeners across all elements.
    pub fn total_listeners(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// Dispatches `event` along the path from the root to `event.target()`.
    pub fn dispatch(&mut self, doc: &mut Document, event: &mut Event) -> DispatchReport {
        let path = doc.composed_path(event.target());
        let mut report = DispatchReport::default();

        let Some((&target, ancestors)) = path.split_last() else {
            debug!("Dropping {} event for unknown {}", event.kind().name(), event.target());
            return report;
        };

        trace!(
            "Dispatching {} to {} through {} ancestors",
            event.kind().name(),
            target,
            ancestors.len()
        );

        // Capturing: root -> parent of target
        for &node in ancestors {
            if event.propagation_stopped() {
                break;
            }
            event.enter(node, Phase::Capturing);
            self.invoke(node, true, doc, event, &mut report);
        }

        // At target: capture listeners, then bubble listeners
        if !event.propagation_stopped() {
            event.enter(target, Phase::AtTarget);
            self.invoke(target, true, doc, event, &mut report);
            if !event.immediate_propagation_stopped() {
                self.invoke(target, false, doc, event, &mut report);
            }
        }

        // Bubbling: parent of target -> root
        if event.bubbles() {
            for &node in ancestors.iter().rev() {
                if event.propagation_stopped() {
                    break;
                }
                event.enter(node, Phase::Bubbling);
                self.invoke(node, false, doc, event, &mut report);
            }
        }

        report.stopped = event.propagation_stopped();
        event.finish();
        report
    }

    /// Runs the matching listeners registered on `node`, in registration order.
    ///
    /// `capture` selects capture listeners over bubble listeners.
    fn invoke(
        &mut self,
        node: NodeId,
        capture: bool,
        doc: &mut Document,
        event: &mut Event,
        report: &mut DispatchReport,
    ) {
        let Some(registrations) = self.listeners.get_mut(&node) else {
            return;
        };

        let mut spent = Vec::new();
        for registration in registrations.iter_mut() {
            if registration.kind != event.kind() {
                continue;
            }
            if registration.options.capture != capture {
                continue;
            }

            (registration.handler)(event, doc);
            report.steps.push(DispatchStep {
                node,
                phase: event.phase(),
                listener: registration.id,
            });
            if registration.options.once {
                spent.push(registration.id);
            }
            if event.immediate_propagation_stopped() {
                break;
            }
        }

        if !spent.is_empty() {
            registrations.retain(|r| !spent.contains(&r.id));
        }
    }
}
