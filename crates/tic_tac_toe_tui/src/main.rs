//! Tic Tac Toe - terminal frontend

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tic_tac_toe_tui::{App, Cli, TerminalGuard, TuiConfig, ui};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TuiConfig::load(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_tracing(&config)?;
    info!("Starting Tic Tac Toe TUI");

    // Restores the terminal when dropped, including on error or panic.
    let guard = TerminalGuard::enter(io::stdout(), *config.mouse())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(&config);
    let res = run_app(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        return Err(err);
    }

    info!("Exiting");
    Ok(())
}

/// Logs go to a file: the terminal belongs to the UI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Event loop: draw, wait for one event, apply it, repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, app);
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(area, mouse.column, mouse.row)
            }
            _ => {}
        }
    }

    Ok(())
}
