//! Pure move application over board values.

use crate::action::MoveError;
use crate::rules::{compute_winner, is_full};
use crate::{Board, Cell, Player, Position};
use tracing::{debug, instrument};

/// Places `player` at `index`, reporting why the move is refused if it is.
///
/// Refused when the index is off the board, when the board already has a
/// winner or no empty cell, or when the cell is occupied.
#[instrument(skip(board))]
pub fn try_apply_move(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

    if compute_winner(board).is_some() || is_full(board) {
        return Err(MoveError::GameOver);
    }

    if !board.is_empty(position) {
        return Err(MoveError::CellOccupied(position));
    }

    let mut next = *board;
    next.set(position, Cell::Occupied(player));
    Ok(next)
}

/// Places `player` at `index`; an illegal move returns the board unchanged.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Board {
    try_apply_move(board, index, player).unwrap_or_else(|e| {
        debug!(error = %e, "Ignoring illegal move");
        *board
    })
}

/// Returns a fresh all-empty board.
#[instrument]
pub fn reset() -> Board {
    Board::new()
}
