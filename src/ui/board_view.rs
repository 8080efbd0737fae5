use crate::board::{Board, BOARD_SIZE};
use crate::ui::theme::{tile_background, tile_foreground, EMPTY_CELL, GLOBAL_BORDER};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Terminal columns per tile.
pub const CELL_WIDTH: u16 = 8;
/// Terminal rows per tile.
pub const CELL_HEIGHT: u16 = 3;

/// Outer size of the rendered board, borders included.
pub fn board_size() -> (u16, u16) {
    let cells = BOARD_SIZE as u16;
    (cells * CELL_WIDTH + 2, cells * CELL_HEIGHT + 2)
}

/// The 4x4 grid, one coloured block per cell.
pub struct BoardView {
    board: Board,
}

impl BoardView {
    pub fn new(board: Board) -> Self {
        Self { board }
    }
}

impl Widget for BoardView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        for (row, line) in self.board.rows().iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                let rect = Rect {
                    x: inner.x + col as u16 * CELL_WIDTH,
                    y: inner.y + row as u16 * CELL_HEIGHT,
                    width: CELL_WIDTH,
                    height: CELL_HEIGHT,
                }
                .intersection(inner);
                if rect.is_empty() {
                    continue;
                }

                let (label, style) = match cell {
                    Some(value) => (
                        value.to_string(),
                        Style::default()
                            .bg(tile_background(*value))
                            .fg(tile_foreground(*value))
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => (String::new(), Style::default().bg(EMPTY_CELL)),
                };

                let mut lines = vec![Line::from(""); (CELL_HEIGHT / 2) as usize];
                lines.push(Line::from(label));
                Paragraph::new(lines)
                    .style(style)
                    .alignment(Alignment::Center)
                    .render(rect, buf);
            }
        }
    }
}
