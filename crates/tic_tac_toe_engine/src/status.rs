//! Game status derivation.

use crate::rules::{compute_winner, is_full};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
///
/// Renders as the status readout text: `Next: Player X`,
/// `Player X wins!` or `It's a draw!`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// Game is ongoing; the given player moves next.
    #[display("Next: Player {_0}")]
    InProgress(Player),
    /// Game ended in a win.
    #[display("Player {_0} wins!")]
    Won(Player),
    /// Game ended in a draw.
    #[display("It's a draw!")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game has concluded.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Derives the status of `board` given who moves next.
///
/// A win takes priority over a draw: a move that fills the last cell
/// and completes a line is a win.
#[instrument(skip(board))]
pub fn derive_status(board: &Board, next_player: Player) -> GameStatus {
    if let Some(winner) = compute_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress(next_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::InProgress(Player::X).to_string(), "Next: Player X");
        assert_eq!(GameStatus::Won(Player::O).to_string(), "Player O wins!");
        assert_eq!(GameStatus::Draw.to_string(), "It's a draw!");
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(
            derive_status(&Board::new(), Player::X),
            GameStatus::InProgress(Player::X)
        );
    }
}
