//! Terminal canvas
//!
//! Rasterizes a frame into a character grid, one cell per `cell_size`
//! playfield pixels. Used by the headless driver to show what is going on.

use glam::Vec2;

use super::Canvas;
use super::shapes::{Color, colors};
use crate::sim::Aabb;

const EMPTY: char = ' ';
const SOLID: char = '#';
const AVATAR: char = '@';

/// Character-grid canvas
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    cols: usize,
    rows: usize,
    /// Playfield pixels per cell (x, y)
    cell_size: Vec2,
    cells: Vec<char>,
}

impl AsciiCanvas {
    /// Grid of `cols` x `rows` cells covering a `playfield_width` x `playfield_height` area
    pub fn new(cols: usize, rows: usize, playfield_width: i32, playfield_height: i32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell_size: Vec2::new(
                playfield_width as f32 / cols as f32,
                playfield_height as f32 / rows as f32,
            ),
            cells: vec![EMPTY; cols * rows],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Cell at `(col, row)`, if inside the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Grid rows joined with newlines, framed by a border
    pub fn render(&self) -> String {
        let border: String = std::iter::repeat_n('-', self.cols).collect();
        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 2));
        out.push('+');
        out.push_str(&border);
        out.push_str("+\n");
        for row in self.cells.chunks(self.cols) {
            out.push('|');
            out.extend(row.iter());
            out.push_str("|\n");
        }
        out.push('+');
        out.push_str(&border);
        out.push('+');
        out
    }

    fn glyph(color: Color) -> char {
        if color == colors::AVATAR { AVATAR } else { SOLID }
    }

    /// Cell range covered by pixel span `[lo, hi)` on one axis
    fn span(lo: f32, hi: f32, cell: f32, count: usize) -> std::ops::Range<usize> {
        let start = (lo / cell).floor().max(0.0) as usize;
        let end = ((hi / cell).ceil().max(0.0) as usize).min(count);
        start.min(end)..end
    }

    fn put(&mut self, col: usize, row: usize, ch: char) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = ch;
        }
    }
}

impl Canvas for AsciiCanvas {
    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        let glyph = Self::glyph(color);
        let min = rect.min.as_vec2();
        let max = rect.max.as_vec2();
        for row in Self::span(min.y, max.y, self.cell_size.y, self.rows) {
            for col in Self::span(min.x, max.x, self.cell_size.x, self.cols) {
                self.put(col, row, glyph);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let glyph = Self::glyph(color);
        let rows = Self::span(center.y - radius, center.y + radius, self.cell_size.y, self.rows);
        let cols = Self::span(center.x - radius, center.x + radius, self.cell_size.x, self.cols);
        for row in rows {
            for col in cols.clone() {
                let cell_center = Vec2::new(col as f32 + 0.5, row as f32 + 0.5) * self.cell_size;
                // Always mark at least the cell holding the center
                let hit = cell_center.distance(center) <= radius
                    || (cell_center - center).abs().cmple(self.cell_size * 0.5).all();
                if hit {
                    self.put(col, row, glyph);
                }
            }
        }
    }

    fn text(&mut self, pos: Vec2, text: &str, _color: Color) {
        // `pos` is the baseline; text sits in the cell row above it
        let row = ((pos.y / self.cell_size.y).floor() as isize - 1).max(0) as usize;
        let col = (pos.x / self.cell_size.x).floor().max(0.0) as usize;
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i, row, ch);
        }
    }
}
