//! Page state and pointer routing.

use super::events::MouseButton;
use crate::config::Config;
use crate::dom::{DispatchReport, Dispatcher, Document, ElementKind, Event, NodeId, Rect};
use crate::draw::HexColor;
use crate::palette::{PaletteError, PaletteLayout, PaletteWidget};
use log::{debug, trace};
use rand::Rng;

/// Distance between the page edge and the palette container.
pub const PAGE_MARGIN: i32 = 16;

/// Main input state holding the page and the palette widget.
///
/// Pointer presses are hit-tested against the element tree and delivered as
/// click events to the innermost element under the pointer. Everything the
/// palette does in response happens inside its own listener.
pub struct InputState {
    /// Element tree of the page
    pub document: Document,
    /// Listeners registered on the page
    pub dispatcher: Dispatcher,
    /// The palette mounted on the page
    pub palette: PaletteWidget,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Number of clicks delivered so far
    pub clicks: usize,
}

impl InputState {
    /// Builds the page (`div.color-palette` above `p.output`) and mounts a
    /// palette configured by `config`.
    pub fn new<R: Rng>(config: &Config, rng: &mut R) -> Result<Self, PaletteError> {
        let mut document = Document::new();
        let mut dispatcher = Dispatcher::new();
        build_page(&mut document)?;

        let layout = PaletteLayout::from_config(&config.palette, &config.output);
        let palette = PaletteWidget::mount(
            &mut document,
            &mut dispatcher,
            ".color-palette",
            ".output",
            config.palette.count,
            layout,
            rng,
        )?;

        Ok(Self {
            document,
            dispatcher,
            palette,
            needs_redraw: true,
            clicks: 0,
        })
    }

    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Mouse X coordinate
    /// * `y` - Mouse Y coordinate
    ///
    /// # Behavior
    /// - Left button: dispatches a click to the innermost element under the pointer
    /// - Other buttons: ignored
    ///
    /// Returns the dispatch report, or `None` when nothing was dispatched.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) -> Option<DispatchReport> {
        if button != MouseButton::Left {
            trace!("Ignoring {:?} button press at ({}, {})", button, x, y);
            return None;
        }

        let target = self.document.hit_test(x, y)?;
        debug!(
            "Click at ({}, {}) hit {}",
            x,
            y,
            self.document
                .element(target)
                .map_or_else(|| target.to_string(), |e| e.describe())
        );

        let before = self.selection();
        let mut event = Event::click_at(target, x, y);
        let report = self.dispatcher.dispatch(&mut self.document, &mut event);
        self.clicks += 1;
        if self.selection() != before {
            self.needs_redraw = true;
        }
        Some(report)
    }

    /// Clicks the center of the swatch at `index`.
    pub fn click_swatch(&mut self, index: usize) -> Option<DispatchReport> {
        let swatch = *self.palette.swatches(&self.document).get(index)?;
        let (x, y) = self.document.element(swatch)?.bounds.center();
        self.on_mouse_press(MouseButton::Left, x, y)
    }

    /// Appends a swatch to the palette.
    pub fn add_swatch(&mut self, color: HexColor) -> Result<NodeId, PaletteError> {
        let swatch = self.palette.add_swatch(&mut self.document, color)?;
        self.needs_redraw = true;
        Ok(swatch)
    }

    /// Replaces all swatches with `count` new random ones.
    pub fn reshuffle<R: Rng>(&mut self, count: usize, rng: &mut R) -> Result<(), PaletteError> {
        self.palette.reinitialize(&mut self.document, count, rng)?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Text shown by the output sink.
    pub fn output_text(&self) -> &str {
        self.palette.output_text(&self.document)
    }

    /// Currently selected color.
    pub fn selected_color(&self) -> Option<HexColor> {
        self.palette.selected_color(&self.document)
    }

    /// Size of the page needed to show every element.
    pub fn page_size(&self) -> (i32, i32) {
        self.document
            .descendants(self.document.root())
            .into_iter()
            .filter_map(|id| self.document.element(id))
            .map(|e| e.bounds)
            .filter(|r| !r.is_empty())
            .fold((0, 0), |(w, h), r| {
                (w.max(r.x + r.w + PAGE_MARGIN), h.max(r.y + r.h + PAGE_MARGIN))
            })
    }

    fn selection(&self) -> (String, Option<HexColor>) {
        (self.output_text().to_string(), self.selected_color())
    }
}

fn build_page(doc: &mut Document) -> Result<(), PaletteError> {
    let root = doc.root();
    let container = doc.create_element(ElementKind::Div);
    doc.add_class(container, "color-palette")?;
    doc.set_bounds(container, Rect::new(PAGE_MARGIN, PAGE_MARGIN, 0, 0))?;
    let output = doc.create_element(ElementKind::Paragraph);
    doc.add_class(output, "output")?;
    doc.append(root, &[container, output])?;
    Ok(())
}
