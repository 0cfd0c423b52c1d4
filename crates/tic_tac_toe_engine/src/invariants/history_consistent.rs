//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::Game;

/// Invariant: every move in history corresponds to exactly one occupied cell.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.history().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
