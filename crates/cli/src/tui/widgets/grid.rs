//! Grid widget for rendering the tiles.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use twenty48_core::Grid;
use twenty48_core::types::Tile;

/// Characters inside one cell, excluding the separator.
const CELL_WIDTH: u16 = 6;

/// Widget for rendering a grid of any supported size.
pub struct GridWidget<'a> {
    grid: &'a Grid,
    /// Cell indices to emphasise, e.g. tiles spawned by the last move
    highlighted: &'a [usize],
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            highlighted: &[],
        }
    }

    /// Sets the cells to highlight.
    pub fn highlight(mut self, cells: &'a [usize]) -> Self {
        self.highlighted = cells;
        self
    }

    /// Columns needed to draw a grid of edge `size`.
    pub fn width(size: usize) -> u16 {
        size as u16 * (CELL_WIDTH + 1) + 1
    }

    /// Rows needed to draw a grid of edge `size`.
    pub fn height(size: usize) -> u16 {
        size as u16 * 2 + 1
    }
}

fn border(size: usize, left: &str, mid: &str, right: &str) -> String {
    let segment = "─".repeat(CELL_WIDTH as usize);
    let mut line = String::from(left);
    for col in 0..size {
        line.push_str(&segment);
        line.push_str(if col + 1 < size { mid } else { right });
    }
    line
}

/// Background and foreground for a tile value.
fn tile_style(value: Tile) -> Style {
    let dark = Color::Rgb(119, 110, 101);
    let light = Color::Rgb(249, 246, 242);
    let (bg, fg) = match value {
        0 => return Style::default().fg(Color::DarkGray),
        2 => (Color::Rgb(238, 228, 218), dark),
        4 => (Color::Rgb(237, 224, 200), dark),
        8 => (Color::Rgb(242, 177, 121), light),
        16 => (Color::Rgb(245, 149, 99), light),
        32 => (Color::Rgb(246, 124, 95), light),
        64 => (Color::Rgb(246, 94, 59), light),
        128 => (Color::Rgb(237, 207, 114), light),
        256 => (Color::Rgb(237, 204, 97), light),
        512 => (Color::Rgb(237, 200, 80), light),
        1024 => (Color::Rgb(237, 197, 63), light),
        2048 => (Color::Rgb(237, 194, 46), light),
        _ => (Color::Rgb(60, 58, 50), light),
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.grid.size();
        if area.width < Self::width(size) || area.height < Self::height(size) {
            return;
        }

        let frame_style = Style::default().fg(Color::DarkGray);
        buf.set_string(area.x, area.y, border(size, "┌", "┬", "┐"), frame_style);

        for row in 0..size {
            let y = area.y + 1 + row as u16 * 2;
            buf.set_string(area.x, y, "│", frame_style);

            for col in 0..size {
                let index = self.grid.index(row, col);
                let value = self.grid.cells()[index];
                let content = if value == 0 {
                    format!("{:^width$}", "·", width = CELL_WIDTH as usize)
                } else {
                    format!("{value:^width$}", width = CELL_WIDTH as usize)
                };

                let mut style = tile_style(value);
                if self.highlighted.contains(&index) {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }

                let x = area.x + 1 + col as u16 * (CELL_WIDTH + 1);
                buf.set_string(x, y, &content, style);
                buf.set_string(x + CELL_WIDTH, y, "│", frame_style);
            }

            let separator = if row + 1 < size {
                border(size, "├", "┼", "┤")
            } else {
                border(size, "└", "┴", "┘")
            };
            buf.set_string(area.x, y + 1, separator, frame_style);
        }
    }
}
