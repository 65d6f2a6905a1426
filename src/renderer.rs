use std::collections::HashSet;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::config::{BOARD_BG, BORDER_FG, FOOD_COLOR, GLYPH_HALF_UPPER, SNAKE_COLOR};
use crate::game::Snapshot;
use crate::grid::{Cell, Grid};

/// Terminal columns and rows needed to show `grid` with its border.
///
/// Every terminal row holds two grid rows via half-block glyphs.
#[must_use]
pub fn required_size(grid: Grid) -> (u16, u16) {
    (grid.count() + 2, grid.count().div_ceil(2) + 2)
}

/// Renders the board and score from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>) {
    let board = board_area(frame.area(), snapshot.grid);
    let block = Block::bordered()
        .title(format!(" Score: {} ", snapshot.score))
        .border_style(Style::new().fg(BORDER_FG));

    let inner = block.inner(board);
    frame.render_widget(block, board);

    let occupied: HashSet<Cell> = snapshot.segments.iter().copied().collect();
    let color_at = |cell: Cell| {
        if !snapshot.grid.in_bounds(cell) {
            Color::Reset
        } else if occupied.contains(&cell) {
            SNAKE_COLOR
        } else if cell == snapshot.food {
            FOOD_COLOR
        } else {
            BOARD_BG
        }
    };

    let buffer = frame.buffer_mut();
    for row in 0..inner.height {
        for column in 0..inner.width {
            let upper = Cell::new(i32::from(column), 2 * i32::from(row));
            let lower = Cell::new(upper.x, upper.y + 1);
            buffer.set_string(
                inner.x + column,
                inner.y + row,
                GLYPH_HALF_UPPER,
                Style::new().fg(color_at(upper)).bg(color_at(lower)),
            );
        }
    }
}

fn board_area(area: Rect, grid: Grid) -> Rect {
    let (width, height) = required_size(grid);
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
