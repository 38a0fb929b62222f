//! Cairo-based rendering of the page.

use std::fs::File;
use std::path::Path;

use anyhow::{Context as _, Result};
use log::{debug, info, warn};

use super::color::{BLACK, Color};
use super::font::FontDescriptor;
use crate::config::Config;
use crate::dom::{Document, Element, ElementKind, Rect};
use crate::input::InputState;

/// Corner radius of swatch buttons in pixels
const SWATCH_RADIUS: f64 = 4.0;

/// Paints every attached element of `doc` in document order.
///
/// Containers are filled with `container_fill`, swatches with their
/// background color and paragraphs show their text in their text color
/// (black when none was selected yet).
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `doc` - Page to draw
/// * `container_fill` - Fill for `div` elements
/// * `font` - Font for paragraph text
/// * `font_size` - Font size in points
pub fn render_page(
    ctx: &cairo::Context,
    doc: &Document,
    container_fill: Color,
    font: &FontDescriptor,
    font_size: f64,
) {
    for id in doc.descendants(doc.root()) {
        if id == doc.root() {
            continue;
        }
        let Some(element) = doc.element(id) else {
            continue;
        };
        if element.bounds.is_empty() {
            continue;
        }
        match element.kind {
            ElementKind::Div => fill_rect(ctx, element.bounds, container_fill, 0.0),
            ElementKind::Button => {
                if let Some(bg) = element.style.background_color {
                    fill_rect(ctx, element.bounds, bg.to_color(), SWATCH_RADIUS);
                }
            }
            ElementKind::Paragraph | ElementKind::Span => {
                render_text(ctx, element, font, font_size);
            }
        }
    }
}

fn fill_rect(ctx: &cairo::Context, rect: Rect, color: Color, radius: f64) {
    let (x, y, w, h) = (rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    ctx.new_path();
    if radius > 0.0 {
        let r = radius.min(w / 2.0).min(h / 2.0);
        let quarter = std::f64::consts::FRAC_PI_2;
        ctx.arc(x + w - r, y + r, r, -quarter, 0.0);
        ctx.arc(x + w - r, y + h - r, r, 0.0, quarter);
        ctx.arc(x + r, y + h - r, r, quarter, 2.0 * quarter);
        ctx.arc(x + r, y + r, r, 2.0 * quarter, 3.0 * quarter);
        ctx.close_path();
    } else {
        ctx.rectangle(x, y, w, h);
    }
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.fill(); // Ignore errors - a failed fill just leaves the area blank
}

fn render_text(ctx: &cairo::Context, element: &Element, font: &FontDescriptor, size: f64) {
    if element.text.is_empty() {
        return;
    }

    // Save context state to prevent settings from leaking to other drawing operations
    ctx.save().ok();

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(&element.text);

    // Vertically center the line inside the element box
    let (_ink, logical) = layout.pixel_extents();
    let bounds = element.bounds;
    let y = bounds.y as f64 + (bounds.h as f64 - logical.height() as f64).max(0.0) / 2.0;

    let color = element.style.color.map_or(BLACK, |c| c.to_color());
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.move_to(bounds.x as f64, y);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

/// Renders the current page to a PNG file.
///
/// # Errors
/// Returns an error if the surface cannot be created or the file cannot be
/// written.
pub fn write_png(state: &InputState, config: &Config, path: &Path) -> Result<()> {
    let (width, height) = state.page_size();
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width.max(1), height.max(1))
        .context("Failed to create image surface")?;

    {
        let ctx = cairo::Context::new(&surface).context("Failed to create Cairo context")?;
        let background = config.render.background.to_color();
        ctx.set_source_rgba(background.r, background.g, background.b, background.a);
        if let Err(e) = ctx.paint() {
            warn!("Failed to paint background: {}", e);
        }
        render_page(
            &ctx,
            &state.document,
            config.render.container_background.to_color(),
            &FontDescriptor::for_output(&config.output),
            config.output.font_size,
        );
    }

    debug!("Rendered {}x{} snapshot", width, height);
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

    info!("Saved snapshot to {}", path.display());
    Ok(())
}
