//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Cell, Game};

/// Invariant: board cells are never overwritten.
///
/// Replaying the history onto an empty board must place every marker on
/// an empty cell and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Cell::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
