//! Terminal UI for tic-tac-toe.
//!
//! A thin surface over [`tic_tac_toe_engine`]: nine clickable cells, a
//! reset control and a status readout. Every UI event is applied to the
//! game synchronously and the screen is redrawn.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
pub mod input;
mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use terminal::TerminalGuard;
