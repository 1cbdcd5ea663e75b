//! Paints a computed [`Frame`] with egui

use super::engine::{Frame, GlyphInstance};
use super::layout::TextLayout;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

/// Line height as a multiple of the font size
pub const LINE_SPACING: f32 = 1.25;

const SHADOW_OFFSET: Vec2 = Vec2::new(2.0, 2.0);
const SHADOW_ALPHA: f32 = 0.35;

/// Glyph grid geometry for a layout centred in a rect
#[derive(Debug, Clone, Copy)]
pub struct GlyphGrid {
    pub origin_y: f32,
    pub center_x: f32,
    pub cell_width: f32,
    pub line_height: f32,
}

impl GlyphGrid {
    pub fn new(rect: Rect, layout: &TextLayout, cell_width: f32, font_size: f32) -> Self {
        let line_height = font_size * LINE_SPACING;
        let block_height = layout.line_count() as f32 * line_height;
        Self {
            origin_y: rect.center().y - block_height / 2.0,
            center_x: rect.center().x,
            cell_width,
            line_height,
        }
    }

    /// Resting centre of the glyph at `col` on a line `line_len` characters long
    pub fn cell_center(&self, line: usize, col: usize, line_len: usize) -> Pos2 {
        let left = self.center_x - line_len as f32 * self.cell_width / 2.0;
        Pos2::new(
            left + (col as f32 + 0.5) * self.cell_width,
            self.origin_y + (line as f32 + 0.5) * self.line_height,
        )
    }
}

/// Draw every glyph of `frame` on a monospace grid centred in `rect`.
pub fn paint_frame(
    painter: &Painter,
    rect: Rect,
    layout: &TextLayout,
    frame: &Frame,
    font_size: f32,
) {
    let font_id = FontId::monospace(font_size);
    let cell_width = painter.ctx().fonts(|f| f.glyph_width(&font_id, 'M'));
    let grid = GlyphGrid::new(rect, layout, cell_width, font_size);

    let line_lens: Vec<usize> = layout
        .lines()
        .iter()
        .map(|line| line.chars().count())
        .collect();

    for glyph in frame.glyphs.iter().chain(frame.caret.iter()) {
        let line_len = line_lens.get(glyph.line).copied().unwrap_or(0);
        let pos = grid.cell_center(glyph.line, glyph.col, line_len) + glyph.offset;
        paint_glyph(painter, pos, glyph, font_size);
    }
}

fn paint_glyph(painter: &Painter, pos: Pos2, glyph: &GlyphInstance, font_size: f32) {
    if glyph.alpha <= 0.0 || glyph.scale <= 0.0 {
        return;
    }

    // Whole points keep the font atlas from growing a size per frame
    let size = (font_size * glyph.scale).round().max(1.0);
    let font_id = FontId::monospace(size);
    let text = glyph.ch.to_string();

    painter.text(
        pos + SHADOW_OFFSET,
        Align2::CENTER_CENTER,
        &text,
        font_id.clone(),
        Color32::BLACK.gamma_multiply(glyph.alpha * SHADOW_ALPHA),
    );
    painter.text(
        pos,
        Align2::CENTER_CENTER,
        text,
        font_id,
        glyph.color.gamma_multiply(glyph.alpha),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_centres_lines() {
        let layout = TextLayout::new("abcd\nab", 24);
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(200.0, 100.0));
        let grid = GlyphGrid::new(rect, &layout, 10.0, 20.0);

        // Two lines of 25pt around y = 50
        assert_eq!(grid.origin_y, 25.0);

        let first = grid.cell_center(0, 0, 4);
        let last = grid.cell_center(0, 3, 4);
        assert_eq!(first, Pos2::new(85.0, 37.5));
        assert_eq!(last, Pos2::new(115.0, 37.5));

        let short = grid.cell_center(1, 0, 2);
        assert_eq!(short, Pos2::new(95.0, 62.5));
    }
}
