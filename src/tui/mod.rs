//! Terminal host for a Cross-Zero table.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use cross_zero::{
    BellNotifier, Config, Controller, FileStore, LogNotifier, Notifier, ScoreLedger, ScoreStore,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use app::{App, PULSE_TICK};

/// Runs the terminal UI until the user quits.
pub fn run_tui(config: Config) -> Result<()> {
    // Log to a file so output does not tear the screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(data_dir = %config.data_dir().display(), "Starting Cross-Zero TUI");

    let ledger = ScoreLedger::load(FileStore::new(config.data_dir()));
    let notifier: Box<dyn Notifier> = if *config.bell() {
        Box::new((LogNotifier, BellNotifier::stdout()))
    } else {
        Box::new(LogNotifier)
    };
    let mut app = App::new(Controller::new(ledger, notifier), *config.keys());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = ?app.controller().scores(), "Cross-Zero TUI stopped");
    res
}

/// Event loop: one input handled to completion per iteration.
#[instrument(skip_all)]
fn run_app<S: ScoreStore, N: Notifier>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S, N>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll at the pulse rate so the win highlight animates without input
        if event::poll(PULSE_TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
