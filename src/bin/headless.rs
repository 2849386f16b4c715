//! Headless 2048 runner.
//!
//! Speaks the line-delimited JSON protocol from `tui_2048::adapter` on
//! stdin/stdout. Logs go to stderr.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use tracing::info;

use tui_2048::adapter;
use tui_2048::config::AppConfig;
use tui_2048::core::GameSession;
use tui_2048::logging;

fn main() -> Result<()> {
    logging::init_tracing_stderr();
    let config = AppConfig::from_env();

    let session = GameSession::with_config(config.session_config(), config.rng())
        .context("failed to start game session")?;
    info!(
        size = config.grid_size,
        win_value = config.win_value,
        seed = ?config.seed,
        "serving headless session on stdio"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    adapter::run(session, stdin.lock(), BufWriter::new(stdout.lock()))
}
