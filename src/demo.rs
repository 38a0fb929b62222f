//! Scripted propagation walkthroughs.
//!
//! Each demo builds `#parent > #child > #descendant`, registers listeners
//! that append to a shared log, clicks `#descendant` and returns the log.
//! The log lines are what the `--demo` flag prints.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dom::{
    Dispatcher, Document, DomError, ElementKind, Event, EventType, ListenerOptions, NodeId, Phase,
    Rect,
};
use crate::palette::{PaletteLayout, PaletteWidget};

/// Available walkthroughs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Handlers fire on the descendant first, then on each ancestor
    Bubbling,
    /// `target` stays the clicked element while `current_target` moves
    Target,
    /// A descendant handler stops the event from reaching its ancestors
    StopPropagation,
    /// A descendant handler also prevents its sibling handlers from running
    StopImmediate,
    /// Capture listeners run on the way down before bubble listeners
    Capture,
    /// `focus` stays on the target while `focusin` bubbles
    NonBubbling,
    /// One container listener serves every palette swatch
    Delegation,
}

impl DemoKind {
    pub const ALL: [DemoKind; 7] = [
        DemoKind::Bubbling,
        DemoKind::Target,
        DemoKind::StopPropagation,
        DemoKind::StopImmediate,
        DemoKind::Capture,
        DemoKind::NonBubbling,
        DemoKind::Delegation,
    ];
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        f.write_str(&name)
    }
}

type Log = Rc<RefCell<Vec<String>>>;

struct Nested {
    doc: Document,
    dispatcher: Dispatcher,
    parent: NodeId,
    child: NodeId,
    descendant: NodeId,
    log: Log,
}

impl Nested {
    fn new() -> Result<Self, DomError> {
        let mut doc = Document::new();
        let root = doc.root();
        let mut add = |parent: NodeId, id: &str, bounds: Rect| -> Result<NodeId, DomError> {
            let node = doc.create_element(ElementKind::Div);
            doc.set_id(node, id)?;
            doc.set_bounds(node, bounds)?;
            doc.append_child(parent, node)?;
            Ok(node)
        };
        let parent = add(root, "parent", Rect::new(0, 0, 300, 300))?;
        let child = add(parent, "child", Rect::new(50, 50, 200, 200))?;
        let descendant = add(child, "descendant", Rect::new(100, 100, 100, 100))?;
        Ok(Self {
            doc,
            dispatcher: Dispatcher::new(),
            parent,
            child,
            descendant,
            log: Rc::new(RefCell::new(Vec::new())),
        })
    }

    /// Registers a listener that logs `<element> <event> handler (<phase>)`.
    ///
    /// Capture listeners log `capture handler` so they can be told apart from
    /// bubble listeners on the target itself.
    fn log_on(&mut self, node: NodeId, kind: EventType, options: ListenerOptions) {
        let log = Rc::clone(&self.log);
        let handler = if options.capture {
            "capture handler"
        } else {
            "handler"
        };
        self.dispatcher
            .add_event_listener(node, kind, options, move |event, doc| {
                log.borrow_mut().push(format!(
                    "{} {} {} ({})",
                    label(doc, event.current_target()),
                    event.kind().name(),
                    handler,
                    phase_label(event.phase())
                ));
            });
    }

    fn dispatch(&mut self, kind: EventType) {
        let mut event = Event::new(kind, self.descendant);
        self.dispatcher.dispatch(&mut self.doc, &mut event);
    }

    fn into_lines(self) -> Vec<String> {
        let lines = self.log.borrow().clone();
        lines
    }
}

fn label(doc: &Document, node: Option<NodeId>) -> String {
    node.and_then(|id| doc.element(id))
        .map_or_else(|| "<none>".to_string(), |e| e.describe())
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::None => "none",
        Phase::Capturing => "capturing",
        Phase::AtTarget => "at target",
        Phase::Bubbling => "bubbling",
    }
}

/// Runs a walkthrough and returns its log lines.
///
/// # Errors
/// Returns an error if the demo page cannot be built.
pub fn run(kind: DemoKind) -> Result<Vec<String>> {
    match kind {
        DemoKind::Bubbling => bubbling(),
        DemoKind::Target => target(),
        DemoKind::StopPropagation => stop_propagation(),
        DemoKind::StopImmediate => stop_immediate(),
        DemoKind::Capture => capture(),
        DemoKind::NonBubbling => non_bubbling(),
        DemoKind::Delegation => delegation(),
    }
}

fn bubbling() -> Result<Vec<String>> {
    let mut demo = Nested::new()?;
    for node in [demo.parent, demo.child, demo.descendant] {
        demo.log_on(node, EventType::Click, ListenerOptions::default());
    }
    demo.dispatch(EventType::Click);
    Ok(demo.into_lines())
}

fn target() -> Result<Vec<String>> {
    let mut demo = Nested::new()?;
    let log = Rc::clone(&demo.log);
    demo.dispatcher.add_event_listener(
        demo.parent,
        EventType::Click,
        ListenerOptions::default(),
        move |event, doc| {
            let mut log = log.borrow_mut();
            log.push(format!("target: {}", label(doc, Some(event.target()))));
            log.push(format!(
                "current target: {}",
                label(doc, event.current_target())
            ));
        },
    );
    demo.dispatch(EventType::Click);
    Ok(demo.into_lines())
}

fn stop_propagation() -> Result<Vec<String>> {
    let mut demo = Nested::new()?;
    demo.log_on(demo.parent, EventType::Click, ListenerOptions::default());
    demo.log_on(demo.child, EventType::Click, ListenerOptions::default());
    let log = Rc::clone(&demo.log);
    demo.dispatcher.add_event_listener(
        demo.descendant,
        EventType::Click,
        ListenerOptions::default(),
        move |event, doc| {
            event.stop_propagation();
            log.borrow_mut().push(format!(
                "{} click handler stopped propagation",
                label(doc, event.current_target())
            ));
        },
    );
    demo.log_on(demo.descendant, EventType::Click, ListenerOptions::default());
    demo.dispatch(EventType::Click);
    Ok(demo.into_lines())
}

fn stop_immediate() -> Result<Vec<String>> {
    let mut demo = Nested::new()?;
    demo.log_on(demo.parent, EventType::Click, ListenerOptions::default());
    let log = Rc::clone(&demo.log);
    demo.dispatcher.add_event_listener(
        demo.descendant,
        EventType::Click,
        ListenerOptions::default(),
        move |event, doc| {
            event.stop_immediate_propagation();
            log.borrow_mut().push(format!(
                "{} click handler stopped immediate propagation",
                label(doc, event.current_target())
            ));
        },
    );
    demo.log_on(demo.descendant, EventType::Click, ListenerOptions::default());
    demo.dispatch(EventType::Click);
    Ok(demo.into_lines())
}

fn capture() -> Result<Vec<String>> {
    let mut demo = Nested::new()?;
    for node in [demo.parent, demo.child, demo.descendant] {
        demo.log_on(node, EventType::Click, ListenerOptions::capture());
        demo.log_on(node, EventType::Click, ListenerOptions::default());
    }
    demo.dispatch(EventType::Click);
    Ok(demo.into_lines())
}

fn non_bubbling() -> Result<Vec<String>> {
    let mut demo = Nested::new()?;
    for node in [demo.parent, demo.descendant] {
        demo.log_on(node, EventType::Focus, ListenerOptions::default());
        demo.log_on(node, EventType::FocusIn, ListenerOptions::default());
    }
    demo.dispatch(EventType::Focus);
    demo.dispatch(EventType::FocusIn);
    Ok(demo.into_lines())
}

fn delegation() -> Result<Vec<String>> {
    let mut doc = Document::new();
    let mut dispatcher = Dispatcher::new();
    let root = doc.root();
    let container = doc.create_element(ElementKind::Div);
    let output = doc.create_element(ElementKind::Paragraph);
    doc.add_class(container, "color-palette")?;
    doc.add_class(output, "output")?;
    doc.append(root, &[container, output])?;

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let widget = PaletteWidget::init(
        &mut doc,
        &mut dispatcher,
        container,
        output,
        4,
        PaletteLayout::default(),
        &mut rng,
    )?;

    let mut lines = vec![format!(
        "{} swatches, {} listener(s)",
        widget.swatches(&doc).len(),
        dispatcher.total_listeners()
    )];
    let mut targets = widget.swatches(&doc);
    targets.insert(1, container);
    for target in targets {
        let mut event = Event::new(EventType::Click, target);
        dispatcher.dispatch(&mut doc, &mut event);
        let shown = widget.output_text(&doc);
        lines.push(format!(
            "click on {} -> {}",
            label(&doc, Some(target)),
            if shown.is_empty() { "(nothing selected)" } else { shown }
        ));
    }
    Ok(lines)
}
