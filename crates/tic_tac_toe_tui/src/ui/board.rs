//! Tic-tac-toe board rendering.

use super::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tic_tac_toe_engine::{Cell, Player, Position};

/// Renders the board: cells, separators, cursor and winning line.
pub fn render_board(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    let winning_line = app.game().winning_line();

    for pos in Position::ALL {
        let highlighted = winning_line.is_some_and(|line| line.contains(&pos));
        render_cell(f, layout.cells[pos.to_index()], app, pos, highlighted);
    }

    render_separators(f, layout.board);
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, pos: Position, highlighted: bool) {
    let game = app.game();
    let enabled = game.is_cell_enabled(pos.to_index());

    let (symbol, base_style) = match game.board().get(pos) {
        Cell::Empty if enabled && app.show_cell_numbers() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (String::new(), Style::default()),
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::Green)
    } else if pos == app.cursor() && !game.is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the marker inside the cell.
    let padding = (CELL_HEIGHT / 2) as usize;
    let mut lines = vec![Line::raw(""); padding];
    lines.push(Line::raw(symbol));
    while lines.len() < CELL_HEIGHT as usize {
        lines.push(Line::raw(""));
    }

    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separators(f: &mut Frame, board: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    let segment = "─".repeat(CELL_WIDTH as usize);
    let horizontal = [segment.as_str(); 3].join("┼");

    for gap in 1..3u16 {
        let y = board.y + gap * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(board.x, y, board.width, 1).intersection(board);
        f.render_widget(Paragraph::new(horizontal.as_str()).style(style), area);

        let x = board.x + gap * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let top = board.y + row * (CELL_HEIGHT + 1);
            let area = Rect::new(x, top, 1, CELL_HEIGHT).intersection(board);
            let bars = vec![Line::raw("│"); CELL_HEIGHT as usize];
            f.render_widget(Paragraph::new(bars).style(style), area);
        }
    }
}
