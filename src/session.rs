//! Session setup and the presenter loops.
//!
//! A session loads the configured map into a fresh engine and hands it to the
//! selected presenter. Load failures abort before any terminal state changes.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};

use crate::config::{PresenterKind, SessionConfig};
use crate::core::{load_file, MazeEngine, MazeError};
use crate::input::{handle_key_event, should_quit};
use crate::term::{ConsolePresenter, MazeView, TerminalRenderer, Viewport, SOLVED_MESSAGE};
use crate::types::PlayState;

/// Load the configured map into a new engine.
pub fn load_engine(config: &SessionConfig) -> Result<MazeEngine, MazeError> {
    match load_file(&config.source) {
        Ok(grid) => {
            debug!(
                source = %config.source.display(),
                rows = grid.rows(),
                cols = grid.cols(),
                "map loaded"
            );
            Ok(MazeEngine::new(grid))
        }
        Err(err) => {
            warn!(source = %config.source.display(), error = %err, "map rejected");
            Err(err)
        }
    }
}

/// Load the map and play it with the configured presenter.
pub fn run(config: &SessionConfig) -> Result<PlayState> {
    let mut engine = load_engine(config)
        .with_context(|| format!("failed to load maze from {}", config.source.display()))?;

    debug!(presenter = config.presenter.as_str(), "starting session");
    let state = match config.presenter {
        PresenterKind::Console => run_console(&mut engine)?,
        PresenterKind::Screen => run_screen(&mut engine)?,
    };
    info!(?state, moves = engine.moves(), "session finished");
    Ok(state)
}

/// Play on stdin/stdout, coloring glyphs only when stdout is a terminal.
pub fn run_console(engine: &mut MazeEngine) -> Result<PlayState> {
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut presenter = ConsolePresenter::new(io::stdin().lock(), stdout.lock()).with_color(color);
    presenter.run(engine)
}

/// Play full-screen. The terminal is restored on every exit path.
pub fn run_screen(engine: &mut MazeEngine) -> Result<PlayState> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = screen_loop(&mut term, engine);

    // Always try to restore terminal state.
    let _ = term.exit();

    let state = result?;
    // The alternate screen is gone; leave the outcome on the normal one.
    match state {
        PlayState::Solved => println!("{}", SOLVED_MESSAGE),
        PlayState::DeclaredUnsolvable => {
            if let Err(err) = engine.check_solvable() {
                println!("{}", err);
            }
        }
        PlayState::Playing => {}
    }
    Ok(state)
}

fn screen_loop(term: &mut TerminalRenderer, engine: &mut MazeEngine) -> Result<PlayState> {
    let view = MazeView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render_engine(engine, Viewport::new(w, h));
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // The final frame stays up until any key.
                if engine.state().is_terminal() || should_quit(key) {
                    return Ok(engine.state());
                }
                if let Some(direction) = handle_key_event(key) {
                    engine.step(direction);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
