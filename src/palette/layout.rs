//! Grid placement of swatches, container and output sink.

use crate::config::{OutputConfig, PaletteConfig};
use crate::dom::Rect;

/// Pixel geometry of the palette grid.
///
/// Swatches flow left to right in rows of `columns`. The container wraps
/// the grid plus `padding` on every side; the padding and the gaps between
/// swatches belong to the container, not to any swatch. The output sink sits
/// `gap` pixels below the container and shares its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub columns: u32,
    pub swatch_size: i32,
    pub gap: i32,
    pub padding: i32,
    pub output_height: i32,
}

impl Default for PaletteLayout {
    fn default() -> Self {
        Self {
            columns: 10,
            swatch_size: 40,
            gap: 4,
            padding: 12,
            output_height: 48,
        }
    }
}

impl PaletteLayout {
    pub fn from_config(palette: &PaletteConfig, output: &OutputConfig) -> Self {
        Self {
            columns: palette.columns,
            swatch_size: palette.swatch_size,
            gap: palette.gap,
            padding: palette.padding,
            output_height: output.height,
        }
    }

    fn columns(&self) -> usize {
        self.columns.max(1) as usize
    }

    fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns())
    }

    fn span(&self, cells: usize) -> i32 {
        let cells = cells as i32;
        if cells == 0 {
            0
        } else {
            cells * self.swatch_size + (cells - 1) * self.gap
        }
    }

    /// Rectangle of the swatch at `index` for a container at `origin`.
    pub fn swatch_rect(&self, origin: (i32, i32), index: usize) -> Rect {
        let col = (index % self.columns()) as i32;
        let row = (index / self.columns()) as i32;
        let step = self.swatch_size + self.gap;
        Rect::new(
            origin.0 + self.padding + col * step,
            origin.1 + self.padding + row * step,
            self.swatch_size,
            self.swatch_size,
        )
    }

    /// Rectangle of a container at `origin` holding `count` swatches.
    ///
    /// The width always fits a full row so the grid doesn't change width as
    /// swatches are added.
    pub fn container_rect(&self, origin: (i32, i32), count: usize) -> Rect {
        Rect::new(
            origin.0,
            origin.1,
            self.span(self.columns()) + 2 * self.padding,
            self.span(self.rows(count)) + 2 * self.padding,
        )
    }

    /// Rectangle of the output sink placed under `container`.
    pub fn output_rect(&self, container: Rect) -> Rect {
        Rect::new(
            container.x,
            container.y + container.h + self.gap,
            container.w,
            self.output_height,
        )
    }
}
