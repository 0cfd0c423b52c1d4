//! Application state and event handling.

use crate::config::TuiConfig;
use crate::input::{Action, action_for_key, move_cursor};
use crate::ui::{ScreenLayout, Target};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tic_tac_toe_engine::{Game, Position};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their 1-9 hint.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text for the status readout.
    pub fn status_text(&self) -> String {
        self.game.status().to_string()
    }

    /// Screen-reader style readout for the cursor cell, e.g. `Center: Empty cell`.
    pub fn cursor_label(&self) -> String {
        format!("{}: {}", self.cursor, self.game.board().get(self.cursor).label())
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = action_for_key(key) {
            self.apply(action);
        }
    }

    /// Handles a left click at terminal coordinates, given the frame area
    /// the last draw used.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16) {
        match ScreenLayout::new(area).hit(column, row) {
            Some(Target::Cell(pos)) => self.apply(Action::Play(pos)),
            Some(Target::Reset) => self.apply(Action::Reset),
            None => debug!("Click outside any control"),
        }
    }

    /// Applies an action. Activations of disabled controls have no effect.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::PlayCursor => self.play(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Reset => self.reset(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        if !self.game.is_cell_enabled(pos.to_index()) {
            debug!(position = %pos, "Cell disabled, ignoring activation");
            return;
        }
        if self.game.play(pos.to_index()) {
            debug!(position = %pos, status = %self.game.status(), "Move applied to UI state");
        }
    }

    /// Restarts the game, if the reset control is enabled.
    pub fn reset(&mut self) {
        if !self.game.can_reset() {
            debug!("Reset disabled, ignoring");
            return;
        }
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tic_tac_toe_engine::{GameStatus, Player};

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.status_text(), "Next: Player O");
    }

    #[test]
    fn test_cursor_play() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().board().get(Position::TopLeft),
            tic_tac_toe_engine::Cell::Occupied(Player::X)
        );
    }

    #[test]
    fn test_reset_disabled_on_fresh_board() {
        let mut app = app();
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Char('r'));
        // Reset ignored: the cursor is not recentred.
        assert_eq!(app.cursor(), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_label_follows_cell() {
        let mut app = app();
        assert_eq!(app.cursor_label(), "Center: Empty cell");
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.cursor_label(), "Center: Cell, X");
        app.handle_key(KeyCode::Down);
        assert_eq!(app.cursor_label(), "Bottom-center: Empty cell");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_win_then_reset() {
        let mut app = app();
        for key in ['1', '2', '4', '3', '7'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.game().status(), GameStatus::Won(Player::X));
        assert_eq!(app.status_text(), "Player X wins!");

        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().history().len(), 5);

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.status_text(), "Next: Player X");
        assert!(app.game().history().is_empty());
    }
}
