//! Game session: the board plus whose turn it is, history and status.

use crate::action::{Move, MoveError};
use crate::engine::try_apply_move;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::winning_line;
use crate::status::derive_status;
use crate::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A tic-tac-toe session.
///
/// Holds the board value, the next player and the derived status. Status
/// is recomputed synchronously after every accepted move.
///
/// Deserialization replays the recorded history, so a record whose board,
/// turn or status disagrees with its moves is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord", into = "GameRecord")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) next_player: Player,
    pub(crate) history: Vec<Move>,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_player: Player::X,
            history: Vec::new(),
            status: GameStatus::InProgress(Player::X),
        }
    }

    /// Builds a game by playing the given cell indices in order.
    ///
    /// # Errors
    ///
    /// Returns the first refused move.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &index in indices {
            game.try_play(index)?;
        }
        Ok(game)
    }

    /// Plays the next player's marker at `index`.
    ///
    /// Illegal moves are silently ignored: returns `false` and leaves the
    /// game untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> bool {
        match self.try_play(index) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                false
            }
        }
    }

    /// Plays the next player's marker at `index`, returning the new status.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the index is off the board, the cell is
    /// occupied, or the game has concluded. The game is unchanged on error.
    #[instrument(skip(self), fields(player = %self.next_player))]
    pub fn try_play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.next_player;
        let board = try_apply_move(&self.board, index, player)?;
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let action = Move::new(player, position);

        self.board = board;
        self.history.push(action);
        self.next_player = player.opponent();
        self.status = derive_status(&self.board, self.next_player);

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated after {}",
            action
        );

        debug!(%action, status = %self.status, "Move applied");
        if self.status.is_over() {
            info!(status = %self.status, moves = self.history.len(), "Game concluded");
        }

        Ok(self.status)
    }

    /// Discards all cell state, history and turn order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose marker the next accepted move places.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Whether a cell accepts activation: empty, and the game still open.
    pub fn is_cell_enabled(&self, index: usize) -> bool {
        !self.is_over()
            && Position::from_index(index).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Whether the reset control is enabled: the game has concluded or
    /// at least one move has been made.
    pub fn can_reset(&self) -> bool {
        self.is_over() || !self.history.is_empty()
    }

    /// Empty positions, or none once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// The triple that won the game, if it was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(&self.board)
    }
}

/// Serialized form of a [`Game`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GameRecord {
    board: Board,
    next_player: Player,
    history: Vec<Move>,
    status: GameStatus,
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        Self {
            board: game.board,
            next_player: game.next_player,
            history: game.history,
            status: game.status,
        }
    }
}

/// A serialized game that cannot be reached by legal play.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameRecordError {
    /// A recorded move was refused on replay.
    #[display("Recorded move {index} is illegal: {source}")]
    IllegalMove {
        /// Position of the move in the history.
        index: usize,
        /// Why the move was refused.
        source: MoveError,
    },

    /// A recorded move was made by the wrong player.
    #[display("Recorded move {index} was played by {player} out of turn")]
    OutOfTurn {
        /// Position of the move in the history.
        index: usize,
        /// The player recorded for the move.
        player: Player,
    },

    /// The board, next player or status disagrees with the history.
    #[display("Recorded {_0} does not match the move history")]
    Mismatch(#[error(not(source))] &'static str),
}

impl TryFrom<GameRecord> for Game {
    type Error = GameRecordError;

    #[instrument(skip(record), fields(moves = record.history.len()))]
    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let mut game = Self::new();
        for (index, mov) in record.history.iter().enumerate() {
            if mov.player != game.next_player {
                return Err(GameRecordError::OutOfTurn {
                    index,
                    player: mov.player,
                });
            }
            game.try_play(mov.position.to_index())
                .map_err(|source| GameRecordError::IllegalMove { index, source })?;
        }

        if game.board != record.board {
            return Err(GameRecordError::Mismatch("board"));
        }
        if game.next_player != record.next_player {
            return Err(GameRecordError::Mismatch("next player"));
        }
        if game.status != record.status {
            return Err(GameRecordError::Mismatch("status"));
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
        assert!(game.history().is_empty());
        assert!(!game.can_reset());
    }

    #[test]
    fn test_play_alternates() {
        let mut game = Game::new();
        assert!(game.play(4));
        assert_eq!(game.next_player(), Player::O);
        assert!(game.play(0));
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(game.board().get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(game.board().get(Position::TopLeft), Cell::Occupied(Player::O));
    }

    #[test]
    fn test_illegal_move_keeps_turn() {
        let mut game = Game::new();
        game.play(4);
        let before = game.clone();
        assert!(!game.play(4));
        assert!(!game.play(9));
        assert_eq!(game, before);
        assert_eq!(game.next_player(), Player::O);
    }

    #[test]
    fn test_try_play_reports_reason() {
        let mut game = Game::new();
        game.play(4);
        assert_eq!(game.try_play(4), Err(MoveError::CellOccupied(Position::Center)));
        assert_eq!(game.try_play(11), Err(MoveError::OutOfBounds(11)));
    }

    #[test]
    fn test_cells_disabled_after_win() {
        let mut game = Game::replay(&[0, 1, 3, 2, 6]).unwrap();
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!((0..9).all(|i| !game.is_cell_enabled(i)));
        assert!(game.valid_moves().is_empty());
        assert_eq!(game.try_play(4), Err(MoveError::GameOver));
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
        );
    }

    #[test]
    fn test_cell_enabled_tracks_occupancy() {
        let mut game = Game::new();
        game.play(2);
        assert!(!game.is_cell_enabled(2));
        assert!(game.is_cell_enabled(3));
        assert!(!game.is_cell_enabled(9));
        assert!(game.can_reset());
    }

    #[test]
    fn test_record_round_trip() {
        let game = Game::replay(&[4, 0, 8]).unwrap();
        let record = GameRecord::from(game.clone());
        assert_eq!(Game::try_from(record), Ok(game));
    }

    #[test]
    fn test_record_with_unplaced_move_is_rejected() {
        let mut record = GameRecord::from(Game::new());
        record.history.push(Move::new(Player::X, Position::Center));
        assert_eq!(
            Game::try_from(record),
            Err(GameRecordError::Mismatch("board"))
        );
    }

    #[test]
    fn test_record_out_of_turn_is_rejected() {
        let mut record = GameRecord::from(Game::new());
        record.history.push(Move::new(Player::O, Position::Center));
        assert_eq!(
            Game::try_from(record),
            Err(GameRecordError::OutOfTurn {
                index: 0,
                player: Player::O
            })
        );
    }

    #[test]
    fn test_record_with_repeated_cell_is_rejected() {
        let mut record = GameRecord::from(Game::replay(&[4]).unwrap());
        record.history.push(Move::new(Player::O, Position::Center));
        assert_eq!(
            Game::try_from(record),
            Err(GameRecordError::IllegalMove {
                index: 1,
                source: MoveError::CellOccupied(Position::Center)
            })
        );
    }

    #[test]
    fn test_record_with_stale_status_is_rejected() {
        let mut record = GameRecord::from(Game::replay(&[0, 1, 3, 2, 6]).unwrap());
        record.status = GameStatus::InProgress(Player::O);
        assert_eq!(
            Game::try_from(record),
            Err(GameRecordError::Mismatch("status"))
        );
    }

    #[test]
    fn test_reset_restores_new_game() {
        let mut game = Game::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert_eq!(game.status(), GameStatus::Draw);
        game.reset();
        assert_eq!(game, Game::new());
    }
}
