//! Terminal preview of the palette and the output sink.
use crate::draw::HexColor;
use crate::input::InputState;

/// ANSI reset sequence
const RESET: &str = "\x1b[0m";
/// Characters printed per swatch cell
const SWATCH_CELL: &str = "  ";

fn background(color: HexColor) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

fn foreground(color: HexColor) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Renders the palette grid with 24-bit background colors, followed by the
/// output line in the selected color.
///
/// Every row is prefixed with the index of its first swatch so `--pick`
/// targets are easy to find.
pub fn render_preview(state: &InputState) -> String {
    let doc = &state.document;
    let columns = state.palette.layout().columns.max(1) as usize;
    let colors: Vec<Option<HexColor>> = state
        .palette
        .swatches(doc)
        .into_iter()
        .map(|id| doc.element(id).and_then(|e| e.style.background_color))
        .collect();

    let mut out = String::new();
    for (row, chunk) in colors.chunks(columns).enumerate() {
        out.push_str(&format!("{:>4} ", row * columns));
        for color in chunk {
            match color {
                Some(color) => {
                    out.push_str(&background(*color));
                    out.push_str(SWATCH_CELL);
                    out.push_str(RESET);
                }
                None => out.push_str(SWATCH_CELL),
            }
        }
        out.push('\n');
    }

    out.push('\n');
    match state.selected_color() {
        Some(color) => {
            out.push_str(&foreground(color));
            out.push_str(state.output_text());
            out.push_str(RESET);
        }
        None => out.push_str("No color selected"),
    }
    out.push('\n');
    out
}
