//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless protocol).
//!
//! # Grid Dimensions
//!
//! - **Default size**: 4x4 (`DEFAULT_GRID_SIZE`)
//! - **Maximum size**: 16x16 (`MAX_GRID_SIZE`), so a full line fits in a fixed buffer
//! - Coordinates: `(x, y)` where `x` grows left to right and `y` grows top to bottom
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIN_VALUE` | 2048 | A tile at or above this value wins the game |
//! | `START_TILES` | 2 | Tiles spawned when a session starts |
//! | `SPAWN_FOUR_ODDS` | 10 | One spawn in ten is a 4, the rest are 2 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, Tile, DEFAULT_GRID_SIZE};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! let tile = Tile::new(2, 0, 3);
//! assert_eq!(tile.pos(), (0, 3));
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// Default grid size (4x4)
pub const DEFAULT_GRID_SIZE: u8 = 4;

/// Largest supported grid size
pub const MAX_GRID_SIZE: u8 = 16;

/// Winning tile threshold
pub const WIN_VALUE: u32 = 2048;

/// Number of tiles spawned at session start
pub const START_TILES: usize = 2;

/// A spawned tile is a 4 with probability `1 / SPAWN_FOUR_ODDS`, otherwise a 2.
pub const SPAWN_FOUR_ODDS: u32 = 10;

/// Value of the common spawn
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of the rare spawn
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Largest tile value a grid holds. Two tiles of this value never merge.
pub const MAX_TILE_VALUE: u32 = 1 << 30;


/// The four directions tiles can slide in
///
/// - **Left** / **Right**: tiles slide along rows
/// - **Up** / **Down**: tiles slide along columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "left" | "l", "right" | "r",
    /// "up" | "u", "down" | "d".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("u"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// True when tiles slide along rows.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when the destination edge is coordinate 0.
    pub fn toward_origin(&self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }
}

/// A numbered tile on the grid
///
/// `value` is a power of two (minimum 2). `x`/`y` are grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub value: u32,
    pub x: u8,
    pub y: u8,
}

impl Tile {
    pub const fn new(value: u32, x: u8, y: u8) -> Self {
        Self { value, x, y }
    }

    pub fn pos(&self) -> (u8, u8) {
        (self.x, self.y)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at ({}, {})", self.value, self.x, self.y)
    }
}

/// Session lifecycle
///
/// `Won` and `Lost` are terminal: no move is accepted until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Active => "active",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Terminal flags as seen by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalState {
    pub won: bool,
    pub lost: bool,
}

impl From<GameStatus> for TerminalState {
    fn from(status: GameStatus) -> Self {
        Self {
            won: status == GameStatus::Won,
            lost: status == GameStatus::Lost,
        }
    }
}

/// Commands a front-end can issue against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Throw away the current session and start a fresh one
    Restart,
}

/// Result of applying one direction to a session.
///
/// A move that changed nothing, or any input on a terminal session, comes back
/// with `moved == false` and `score_delta == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub moved: bool,
    pub score_delta: u32,
    pub won: bool,
    pub lost: bool,
    /// Tile placed after a successful move, if any cell was free.
    pub spawned: Option<Tile>,
}
