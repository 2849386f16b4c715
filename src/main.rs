//! Terminal 2048 runner (default binary).
//!
//! Reads configuration from the environment, then loops: render the current
//! snapshot, block for one key event, apply it. Uses crossterm for input and a
//! custom framebuffer-based renderer.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;
use tracing::info;

use tui_2048::config::{self, AppConfig};
use tui_2048::core::{GameSession, GameSnapshot};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameCommand;

fn main() -> Result<()> {
    // Logging first so configuration warnings reach the log file.
    logging::init_tracing(std::env::var(config::LOG_VAR).ok().as_deref());
    let config = AppConfig::from_env();

    let session = GameSession::with_config(config.session_config(), config.rng())
        .context("failed to start game session")?;
    info!(
        size = config.grid_size,
        win_value = config.win_value,
        seed = ?config.seed,
        "starting terminal session"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: GameSession<StdRng>) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input. Turn based, so block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(score = session.score(), moves = session.moves(), "quit");
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameCommand::Move(direction)) => {
                        session.apply_direction(direction);
                    }
                    Some(GameCommand::Restart) => session.restart(),
                    None => {}
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
