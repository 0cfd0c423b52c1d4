//! UI rendering using ratatui.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tic_tac_toe_engine::Position;

pub use board::render_board;

/// Width of one board cell, in terminal columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, in terminal rows.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const RESET_WIDTH: u16 = 13;

/// Something on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// One of the nine cells.
    Cell(Position),
    /// The reset control.
    Reset,
}

/// Screen regions for a given terminal size.
///
/// Rendering and mouse hit-testing both derive from this, so a click
/// lands on exactly what was drawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status readout.
    pub status: Rect,
    /// The whole board, separators included.
    pub board: Rect,
    /// Cells in index order.
    pub cells: [Rect; 9],
    /// Reset control.
    pub reset: Rect,
    /// Cursor cell readout above the key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(3),            // Status
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(3),            // Reset
                Constraint::Length(2),            // Cursor readout + help
            ])
            .split(area);

        let board = center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                board.x + pos.column() as u16 * (CELL_WIDTH + 1),
                board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        Self {
            title: chunks[0],
            status: chunks[1],
            board,
            cells,
            reset: center_rect(chunks[3], RESET_WIDTH, 3),
            help: chunks[4],
        }
    }

    /// Returns what sits under the terminal cell at (`column`, `row`).
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        if contains(self.reset, column, row) {
            return Some(Target::Reset);
        }
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cells[pos.to_index()], column, row))
            .map(Target::Cell)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title);

    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, layout.status);

    render_board(f, &layout, app);

    let reset_style = if app.game().can_reset() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let reset = Paragraph::new("Reset")
        .style(reset_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(reset_style));
    f.render_widget(reset, layout.reset);

    let help = Paragraph::new(vec![
        Line::raw(app.cursor_label()),
        Line::styled(
            "Click or 1-9: play | Arrows + Enter: cursor | R: Reset | Q: Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center);
    f.render_widget(help, layout.help);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 30,
    };

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = ScreenLayout::new(SCREEN);
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_every_cell_center() {
        let layout = ScreenLayout::new(SCREEN);
        for pos in Position::ALL {
            let rect = layout.cells[pos.to_index()];
            let hit = layout.hit(rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(hit, Some(Target::Cell(pos)));
        }
    }

    #[test]
    fn test_hit_reset_and_separators() {
        let layout = ScreenLayout::new(SCREEN);
        assert_eq!(layout.hit(layout.reset.x + 1, layout.reset.y + 1), Some(Target::Reset));

        // The column between the first two cells is a separator.
        let first = layout.cells[0];
        assert_eq!(layout.hit(first.x + CELL_WIDTH, first.y), None);
        assert_eq!(layout.hit(0, 0), None);
    }
}
