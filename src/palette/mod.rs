//! Color palette widget built on event delegation.
//!
//! The widget fills a container element with swatch buttons and registers a
//! **single** click listener on the container. Clicks on any swatch bubble up
//! to that listener, which looks at `event.target()` to find out which swatch
//! was hit and copies its color into the output element. Swatches added
//! later are handled by the same listener without any extra registration.

pub mod layout;
pub mod random;

#[cfg(test)]
mod tests;

pub use layout::PaletteLayout;
pub use random::{channel_from_unit, random_color};

use log::{debug, info, trace, warn};
use rand::Rng;
use thiserror::Error;

use crate::dom::{
    Dispatcher, Document, DomError, ElementKind, Event, EventType, ListenerId, ListenerOptions,
    NodeId,
};
use crate::draw::HexColor;

/// Data attribute carrying a swatch's color.
pub const COLOR_DATA_KEY: &str = "color";
/// Class added to every swatch button.
pub const SWATCH_CLASS: &str = "item";
/// Prefix of the output sink text.
pub const SELECTED_PREFIX: &str = "Selected color: ";

/// Configuration errors raised while setting up the widget.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette container '{0}' not found")]
    MissingContainer(String),
    #[error("palette output '{0}' not found")]
    MissingOutput(String),
    #[error("swatch count must be at least 1")]
    EmptyPalette,
    #[error("container {0} already holds a palette")]
    AlreadyMounted(NodeId),
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// A palette of color swatches plus the element that shows the selection.
///
/// The widget owns no tree state of its own: the swatches live in the
/// [`Document`] and the listener lives in the [`Dispatcher`]. It only
/// remembers which elements it manages.
#[derive(Debug)]
pub struct PaletteWidget {
    container: NodeId,
    output: NodeId,
    layout: PaletteLayout,
    listener: Option<ListenerId>,
}

impl PaletteWidget {
    /// Creates `count` random swatches inside `container` and starts listening
    /// for clicks on it.
    ///
    /// # Errors
    /// Returns an error if `container` or `output` is not part of `doc`, if
    /// `count` is zero, or if `container` already holds swatches.
    pub fn init<R: Rng>(
        doc: &mut Document,
        dispatcher: &mut Dispatcher,
        container: NodeId,
        output: NodeId,
        count: usize,
        layout: PaletteLayout,
        rng: &mut R,
    ) -> Result<Self, PaletteError> {
        if !is_attached(doc, container) {
            return Err(PaletteError::MissingContainer(container.to_string()));
        }
        if !is_attached(doc, output) {
            return Err(PaletteError::MissingOutput(output.to_string()));
        }
        if count == 0 {
            return Err(PaletteError::EmptyPalette);
        }
        if !swatches_in(doc, container).is_empty() {
            return Err(PaletteError::AlreadyMounted(container));
        }

        let mut widget = Self {
            container,
            output,
            layout,
            listener: None,
        };
        widget.populate(doc, count, rng)?;

        let listener = dispatcher.add_event_listener(
            container,
            EventType::Click,
            ListenerOptions::default(),
            move |event, doc| select_color(event, doc, output),
        );
        widget.listener = Some(listener);

        info!("Palette ready with {} swatches", count);
        Ok(widget)
    }

    /// Like [`PaletteWidget::init`], but resolves the container and output
    /// through selectors such as `.color-palette` or `#output`.
    pub fn mount<R: Rng>(
        doc: &mut Document,
        dispatcher: &mut Dispatcher,
        container_selector: &str,
        output_selector: &str,
        count: usize,
        layout: PaletteLayout,
        rng: &mut R,
    ) -> Result<Self, PaletteError> {
        let container = doc
            .query_selector(container_selector)
            .ok_or_else(|| PaletteError::MissingContainer(container_selector.to_string()))?;
        let output = doc
            .query_selector(output_selector)
            .ok_or_else(|| PaletteError::MissingOutput(output_selector.to_string()))?;
        Self::init(doc, dispatcher, container, output, count, layout, rng)
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn output(&self) -> NodeId {
        self.output
    }

    pub fn layout(&self) -> PaletteLayout {
        self.layout
    }

    /// The container's click listener, while attached.
    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    /// Swatch buttons in display order.
    pub fn swatches(&self, doc: &Document) -> Vec<NodeId> {
        swatches_in(doc, self.container)
    }

    /// Color stored on the swatch at `index`.
    pub fn swatch_color(&self, doc: &Document, index: usize) -> Option<HexColor> {
        let swatch = *self.swatches(doc).get(index)?;
        doc.element(swatch)?.data(COLOR_DATA_KEY)?.parse().ok()
    }

    /// Color currently shown by the output element, if any was selected.
    pub fn selected_color(&self, doc: &Document) -> Option<HexColor> {
        doc.element(self.output)?.style.color
    }

    /// Text currently shown by the output element.
    pub fn output_text<'a>(&self, doc: &'a Document) -> &'a str {
        doc.element(self.output).map_or("", |e| e.text.as_str())
    }

    /// Appends one swatch after initialization.
    ///
    /// No listener is registered; the container listener picks up clicks on
    /// the new swatch through bubbling.
    pub fn add_swatch(&self, doc: &mut Document, color: HexColor) -> Result<NodeId, PaletteError> {
        let index = self.swatches(doc).len();
        let swatch = self.create_swatch(doc, color, index)?;
        doc.append_child(self.container, swatch)?;
        self.fit(doc, index + 1)?;
        debug!("Added swatch {} with color {}", swatch, color);
        Ok(swatch)
    }

    /// Replaces every swatch with `count` fresh random ones.
    ///
    /// The existing container listener keeps serving the new swatches. The
    /// output element keeps showing the last selection, and other children
    /// of the container stay where they are.
    pub fn reinitialize<R: Rng>(
        &self,
        doc: &mut Document,
        count: usize,
        rng: &mut R,
    ) -> Result<(), PaletteError> {
        if count == 0 {
            return Err(PaletteError::EmptyPalette);
        }
        let removed = self.swatches(doc);
        for &swatch in &removed {
            doc.remove(swatch)?;
        }
        debug!("Removed {} swatches", removed.len());
        self.populate(doc, count, rng)?;
        info!("Palette reinitialized with {} swatches", count);
        Ok(())
    }

    /// Stops listening for clicks. Returns `false` if already detached.
    pub fn detach(&mut self, dispatcher: &mut Dispatcher) -> bool {
        match self.listener.take() {
            Some(id) => dispatcher.remove_event_listener(id),
            None => false,
        }
    }

    fn populate<R: Rng>(
        &self,
        doc: &mut Document,
        count: usize,
        rng: &mut R,
    ) -> Result<(), PaletteError> {
        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            let color = random_color(rng);
            items.push(self.create_swatch(doc, color, index)?);
        }
        doc.append(self.container, &items)?;
        self.fit(doc, count)
    }

    fn create_swatch(
        &self,
        doc: &mut Document,
        color: HexColor,
        index: usize,
    ) -> Result<NodeId, PaletteError> {
        let origin = self.origin(doc);
        let swatch = doc.create_element(ElementKind::Button);
        doc.add_class(swatch, SWATCH_CLASS)?;
        doc.set_data(swatch, COLOR_DATA_KEY, &color.to_string())?;
        doc.set_bounds(swatch, self.layout.swatch_rect(origin, index))?;
        if let Some(element) = doc.element_mut(swatch) {
            element.style.background_color = Some(color);
        }
        Ok(swatch)
    }

    fn origin(&self, doc: &Document) -> (i32, i32) {
        doc.element(self.container)
            .map_or((0, 0), |e| (e.bounds.x, e.bounds.y))
    }

    /// Resizes the container for `count` swatches and moves the output
    /// element under it.
    fn fit(&self, doc: &mut Document, count: usize) -> Result<(), PaletteError> {
        let container = self.layout.container_rect(self.origin(doc), count);
        doc.set_bounds(self.container, container)?;
        doc.set_bounds(self.output, self.layout.output_rect(container))?;
        Ok(())
    }
}

/// Children of `container` created by a palette: buttons carrying the swatch class.
fn swatches_in(doc: &Document, container: NodeId) -> Vec<NodeId> {
    doc.children(container)
        .iter()
        .copied()
        .filter(|&id| {
            doc.element(id)
                .is_some_and(|e| e.kind == ElementKind::Button && e.has_class(SWATCH_CLASS))
        })
        .collect()
}

fn is_attached(doc: &Document, node: NodeId) -> bool {
    doc.element(node).is_some() && doc.contains(doc.root(), node)
}

/// Delegated click handler registered on the palette container.
///
/// Only clicks whose target is a swatch button change the output; clicks on
/// the container's padding or gaps return without touching anything.
fn select_color(event: &mut Event, doc: &mut Document, output: NodeId) {
    let Some(target) = doc.element(event.target()) else {
        return;
    };
    match target.kind {
        ElementKind::Button => {}
        ElementKind::Div | ElementKind::Paragraph | ElementKind::Span => {
            trace!("Ignoring click on {}", target.describe());
            return;
        }
    }

    let Some(raw) = target.data(COLOR_DATA_KEY) else {
        debug!("Ignoring click on {} without a color", target.describe());
        return;
    };
    let color: HexColor = match raw.parse() {
        Ok(color) => color,
        Err(e) => {
            warn!("Ignoring click on {}: {}", target.describe(), e);
            return;
        }
    };
    let text = format!("{SELECTED_PREFIX}{raw}");

    if let Some(sink) = doc.element_mut(output) {
        sink.text = text;
        sink.style.color = Some(color);
        debug!("Selected color {}", color);
    }
}
