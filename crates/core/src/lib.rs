//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: the grid, move resolution, tile spawning
//! and the session state machine. It has **no dependencies** on UI, terminals or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable without a rendering surface
//! - **Portable**: Runs behind a terminal, a line protocol, or nothing at all
//!
//! # Module Structure
//!
//! - [`grid`]: square board holding an unordered set of tiles
//! - [`resolver`]: slide/merge algorithm shared by all four directions
//! - [`spawner`]: picks an empty cell and a 2 or 4
//! - [`rng`]: the [`RandomSource`] seam plus a seedable LCG
//! - [`session`]: score, status and the move → spawn → evaluate cycle
//! - [`snapshot`]: fixed-size copy of a session for presentation layers
//! - [`error`]: rejected-input error kinds
//!
//! # Game Rules
//!
//! - Tiles slide as far as possible toward the chosen edge
//! - Two equal neighbours merge into one tile of double value; a tile merges at
//!   most once per move
//! - Each merge adds the new value to the score
//! - A move that changes nothing is ignored and spawns nothing
//! - After a successful move a 2 (90%) or 4 (10%) appears on a random empty cell
//! - Reaching 2048 wins; a full board with no merge in any direction loses
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameSession, Grid, SimpleRng};
//! use tui_2048_types::{Direction, GameStatus, Tile};
//!
//! // Two 1024s one slide away from the winning tile.
//! let grid = Grid::from_tiles(4, [Tile::new(1024, 0, 0), Tile::new(1024, 1, 0)]).unwrap();
//! let mut game = GameSession::from_grid(grid, SimpleRng::new(7)).unwrap();
//!
//! let outcome = game.apply_direction(Direction::Left);
//! assert!(outcome.moved);
//! assert_eq!(outcome.score_delta, 2048);
//! assert!(outcome.won);
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

pub mod error;
pub mod grid;
pub mod resolver;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod spawner;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use error::GameError;
pub use grid::Grid;
pub use resolver::{can_move, has_available_move, resolve, Resolution, TileTransition};
pub use rng::{RandomSource, SimpleRng};
pub use session::{parse_direction, GameSession, SessionConfig};
pub use snapshot::GameSnapshot;
pub use spawner::spawn;
