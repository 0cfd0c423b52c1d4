//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: move `k` belongs to X when `k` is even and to O when odd,
/// and the next player follows the same rule.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        history
            .iter()
            .enumerate()
            .all(|(turn, mov)| mov.player == Player::for_turn(turn))
            && game.next_player() == Player::for_turn(history.len())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
