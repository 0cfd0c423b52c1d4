//! Status invariant: the stored status is the one derived from the board.

use super::Invariant;
use crate::Game;
use crate::status::derive_status;

/// Invariant: `status == derive_status(board, next_player)`.
pub struct StatusDerivedInvariant;

impl Invariant<Game> for StatusDerivedInvariant {
    fn holds(game: &Game) -> bool {
        game.status() == derive_status(game.board(), game.next_player())
    }

    fn description() -> &'static str {
        "Status is derived from the current board"
    }
}
