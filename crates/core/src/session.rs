//! Game session - one game from first spawn to win or loss
//!
//! The session ties together the grid, the resolver, the spawner and the score.
//! Every input is processed to completion (resolve, spawn, evaluate) inside one
//! `&mut self` call, so two moves can never interleave.

use tracing::{debug, info, trace};

use crate::error::GameError;
use crate::grid::{validate_size, Grid};
use crate::resolver::{has_available_move, resolve, TileTransition};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::spawner::spawn;
use crate::types::{
    Direction, GameStatus, MoveOutcome, TerminalState, Tile, DEFAULT_GRID_SIZE, MAX_TILE_VALUE,
    START_TILES, WIN_VALUE,
};

/// Rules fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid_size: u8,
    pub win_value: u32,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        validate_size(self.grid_size)?;
        if self.win_value < 4 || !self.win_value.is_power_of_two() {
            return Err(GameError::config(format!(
                "win value {} must be a power of two of at least 4",
                self.win_value
            )));
        }
        if self.win_value > MAX_TILE_VALUE {
            return Err(GameError::config(format!(
                "win value {} exceeds the largest tile {}",
                self.win_value, MAX_TILE_VALUE
            )));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            win_value: WIN_VALUE,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    config: SessionConfig,
    grid: Grid,
    score: u32,
    status: GameStatus,
    /// Successful moves since the last (re)start.
    moves: u32,
    /// Transitions of the last successful move, for presentation layers.
    last_transitions: Vec<TileTransition>,
    rng: R,
}

impl<R: RandomSource> GameSession<R> {
    /// Start a game on a `grid_size` board with the default win value.
    pub fn new(grid_size: u8, rng: R) -> Result<Self, GameError> {
        Self::with_config(
            SessionConfig {
                grid_size,
                ..SessionConfig::default()
            },
            rng,
        )
    }

    /// Start a game with explicit rules. Spawns the opening tiles.
    pub fn with_config(config: SessionConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::start_validated(config, rng))
    }

    /// Start a game from a config that already passed `validate`.
    fn start_validated(config: SessionConfig, rng: R) -> Self {
        let mut session = Self {
            config,
            grid: Grid::from_parts(config.grid_size, Vec::new()),
            score: 0,
            status: GameStatus::Active,
            moves: 0,
            last_transitions: Vec::new(),
            rng,
        };
        session.start();
        session
    }

    /// Adopt a prepared grid without spawning.
    ///
    /// Terminal conditions are evaluated right away, so a stuck board starts `Lost`.
    pub fn from_grid(grid: Grid, rng: R) -> Result<Self, GameError> {
        Self::from_grid_with_config(grid, WIN_VALUE, rng)
    }

    pub fn from_grid_with_config(grid: Grid, win_value: u32, rng: R) -> Result<Self, GameError> {
        let config = SessionConfig {
            grid_size: grid.size(),
            win_value,
        };
        config.validate()?;
        let mut session = Self {
            config,
            grid,
            score: 0,
            status: GameStatus::Active,
            moves: 0,
            last_transitions: Vec::new(),
            rng,
        };
        session.evaluate_status();
        Ok(session)
    }

    /// Throw the current game away and start a fresh one with the same rules.
    pub fn restart(&mut self) {
        info!(score = self.score, moves = self.moves, "restarting session");
        self.grid.clear();
        self.score = 0;
        self.status = GameStatus::Active;
        self.moves = 0;
        self.last_transitions.clear();
        self.start();
    }

    fn start(&mut self) {
        for _ in 0..START_TILES {
            self.spawn_tile();
        }
        self.evaluate_status();
    }

    /// Apply one direction.
    ///
    /// Input on a terminal session and moves that change nothing are ignored:
    /// the outcome reports `moved == false` and nothing is spawned.
    pub fn apply_direction(&mut self, direction: Direction) -> MoveOutcome {
        if self.status.is_terminal() {
            trace!(?direction, status = self.status.as_str(), "input ignored on finished game");
            return self.outcome(false, 0, None);
        }

        let resolution = resolve(&self.grid, direction);
        debug!(
            ?direction,
            moved = resolution.moved,
            score_delta = resolution.score_delta,
            "resolved move"
        );
        if !resolution.moved {
            return self.outcome(false, 0, None);
        }

        self.grid = resolution.grid;
        self.last_transitions = resolution.transitions;
        self.score = self.score.saturating_add(resolution.score_delta);
        self.moves += 1;
        let spawned = self.spawn_tile();
        self.evaluate_status();

        self.outcome(true, resolution.score_delta, spawned)
    }

    /// Parse a direction name and apply it.
    pub fn apply_input(&mut self, input: &str) -> Result<MoveOutcome, GameError> {
        let direction = parse_direction(input)?;
        Ok(self.apply_direction(direction))
    }

    fn spawn_tile(&mut self) -> Option<Tile> {
        let tile = spawn(&self.grid, &mut self.rng)?;
        // Spawner only hands out empty in-range cells.
        if let Err(err) = self.grid.insert(tile) {
            debug!(%err, "spawned tile rejected");
            return None;
        }
        trace!(value = tile.value, x = tile.x, y = tile.y, "spawned tile");
        Some(tile)
    }

    fn evaluate_status(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        if self.grid.max_value() >= self.config.win_value {
            self.status = GameStatus::Won;
            info!(score = self.score, moves = self.moves, "game won");
        } else if self.grid.is_full() && !has_available_move(&self.grid) {
            self.status = GameStatus::Lost;
            info!(score = self.score, moves = self.moves, "game lost");
        }
    }

    fn outcome(&self, moved: bool, score_delta: u32, spawned: Option<Tile>) -> MoveOutcome {
        let terminal = self.terminal();
        MoveOutcome {
            moved,
            score_delta,
            won: terminal.won,
            lost: terminal.lost,
            spawned,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.size = self.grid.size();
        let n = self.grid.cell_count();
        self.grid.write_values(&mut out.cells[..n]);
        out.score = self.score;
        out.status = self.status;
        out.moves = self.moves;
        out.max_tile = self.grid.max_value();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl<R> GameSession<R> {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tiles(&self) -> &[Tile] {
        self.grid.tiles()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn terminal(&self) -> TerminalState {
        self.status.into()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn size(&self) -> u8 {
        self.config.grid_size
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_transitions(&self) -> &[TileTransition] {
        &self.last_transitions
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl Default for GameSession<SimpleRng> {
    /// Classic 4x4 game to 2048, seeded with `SimpleRng::default()`.
    fn default() -> Self {
        Self::start_validated(SessionConfig::default(), SimpleRng::default())
    }
}

/// Parse a direction name, rejecting anything that is not left/right/up/down.
pub fn parse_direction(input: &str) -> Result<Direction, GameError> {
    Direction::from_str(input).ok_or_else(|| GameError::InvalidDirection {
        input: input.to_string(),
    })
}
