//! Tic-tac-toe game engine.
//!
//! Pure game-state logic: board values, move legality, win and draw
//! detection, status derivation and reset. No rendering, no I/O.
//!
//! # Architecture
//!
//! - **Board**: a 9-cell value, row-major. Moves produce new boards.
//! - **Rules**: the 8 winning triples, winner and draw detection.
//! - **Engine**: free functions [`apply_move`], [`derive_status`], [`reset`].
//! - **Game**: a session holding the board, next player, history and status.
//! - **Invariants**: properties checked after every accepted move.
//!
//! # Example
//!
//! ```
//! use tic_tac_toe_engine::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 1, 3, 2, 6] {
//!     game.play(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.status().to_string(), "Player X wins!");
//!
//! // Moves after the game is over are ignored.
//! assert!(!game.play(4));
//!
//! game.reset();
//! assert_eq!(game.status().to_string(), "Next: Player X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{Move, MoveError};
pub use engine::{apply_move, reset, try_apply_move};
pub use game::{Game, GameRecordError};
pub use position::Position;
pub use rules::{LINES, compute_winner, is_draw, is_full, winning_line};
pub use status::{GameStatus, derive_status};
pub use types::{Board, Cell, Player};
