//! Terminal setup and restore.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Puts the terminal into raw mode on the alternate screen and puts it
/// back when dropped.
///
/// Restoring runs on normal exit, on early `?` returns and while unwinding
/// from a panic. Each step is attempted even if an earlier one fails.
pub struct TerminalGuard<W: Write> {
    out: W,
    mouse: bool,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, enters the alternate screen and optionally
    /// captures the mouse.
    pub fn enter(out: W, mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out,
            mouse,
            raw_mode: true,
        };
        execute!(guard.out, EnterAlternateScreen)?;
        if mouse {
            execute!(guard.out, EnableMouseCapture)?;
        }
        debug!(mouse, "Terminal prepared");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.raw_mode {
            if let Err(e) = disable_raw_mode() {
                warn!(error = %e, "Failed to disable raw mode");
            }
        }
        if self.mouse {
            if let Err(e) = execute!(self.out, DisableMouseCapture) {
                warn!(error = %e, "Failed to release mouse");
            }
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        debug!("Terminal restored");
    }
}
