//! Move resolution - slide and merge tiles in one direction
//!
//! One algorithm serves all four directions. Each line perpendicular to the move
//! (rows for left/right, columns for up/down) is handled independently:
//!
//! 1. Collect the tiles on the line, nearest to the destination edge first.
//! 2. Walk them, building a compacted line. A tile equal to the last placed slot
//!    merges into it unless that slot already merged during this move or the
//!    result would exceed `MAX_TILE_VALUE`.
//! 3. Lay the compacted line out contiguously from the destination edge.
//!
//! Resolution never touches the input grid. When nothing moves, the returned grid
//! is an exact copy of the input.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Direction, Tile, MAX_GRID_SIZE, MAX_TILE_VALUE};

const LINE_CAP: usize = MAX_GRID_SIZE as usize;

/// Where one input tile went during a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileTransition {
    pub from: (u8, u8),
    pub to: (u8, u8),
    /// Value before the move.
    pub value: u32,
    /// The tile was absorbed into the tile now at `to`.
    pub merged: bool,
}

impl TileTransition {
    pub fn is_stationary(&self) -> bool {
        self.from == self.to && !self.merged
    }
}

/// Result of resolving one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub grid: Grid,
    pub score_delta: u32,
    pub moved: bool,
    /// One entry per input tile.
    pub transitions: Vec<TileTransition>,
}

/// A slot of the compacted line.
struct Slot {
    value: u32,
    /// Transient marker: this slot has absorbed a tile during this move.
    merged: bool,
}

/// Resolve `direction` against `grid`.
pub fn resolve(grid: &Grid, direction: Direction) -> Resolution {
    let size = grid.size();
    let mut tiles = Vec::with_capacity(grid.len());
    let mut transitions = Vec::with_capacity(grid.len());
    let mut score_delta = 0u32;
    let mut moved = false;

    for line in 0..size {
        let mut members: ArrayVec<Tile, LINE_CAP> = grid
            .tiles()
            .iter()
            .copied()
            .filter(|t| line_of(t, direction) == line)
            .collect();
        if members.is_empty() {
            continue;
        }
        members.sort_unstable_by_key(|t| distance_from_edge(t, direction, size));

        let mut slots: ArrayVec<Slot, LINE_CAP> = ArrayVec::new();
        for tile in &members {
            let merged_value = match slots.last() {
                Some(last) if last.value == tile.value && !last.merged => {
                    merge_value(last.value)
                }
                _ => None,
            };
            let absorbed = merged_value.is_some();
            match merged_value {
                Some(value) => {
                    if let Some(last) = slots.last_mut() {
                        last.value = value;
                        last.merged = true;
                    }
                    score_delta = score_delta.saturating_add(value);
                }
                None => slots.push(Slot {
                    value: tile.value,
                    merged: false,
                }),
            }

            let to = place(line, (slots.len() - 1) as u8, direction, size);
            if absorbed || to != tile.pos() {
                moved = true;
            }
            transitions.push(TileTransition {
                from: tile.pos(),
                to,
                value: tile.value,
                merged: absorbed,
            });
        }

        for (i, slot) in slots.iter().enumerate() {
            let (x, y) = place(line, i as u8, direction, size);
            tiles.push(Tile::new(slot.value, x, y));
        }
    }

    if !moved {
        return Resolution {
            grid: grid.clone(),
            score_delta: 0,
            moved: false,
            transitions,
        };
    }

    Resolution {
        grid: Grid::from_parts(size, tiles),
        score_delta,
        moved,
        transitions,
    }
}

/// True if resolving `direction` would change the grid.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    resolve(grid, direction).moved
}

/// True if at least one direction changes the grid.
pub fn has_available_move(grid: &Grid) -> bool {
    Direction::ALL.iter().any(|&dir| can_move(grid, dir))
}

/// Value of two merged `value` tiles, `None` past `MAX_TILE_VALUE`.
#[inline]
fn merge_value(value: u32) -> Option<u32> {
    value.checked_mul(2).filter(|&v| v <= MAX_TILE_VALUE)
}

/// Index of the line a tile belongs to for this direction.
#[inline]
fn line_of(tile: &Tile, direction: Direction) -> u8 {
    if direction.is_horizontal() {
        tile.y
    } else {
        tile.x
    }
}

/// How far a tile sits from the destination edge along the move axis.
#[inline]
fn distance_from_edge(tile: &Tile, direction: Direction, size: u8) -> u8 {
    let along = if direction.is_horizontal() { tile.x } else { tile.y };
    if direction.toward_origin() {
        along
    } else {
        size - 1 - along
    }
}

/// Cell of the `slot`-th compacted entry on `line`.
#[inline]
fn place(line: u8, slot: u8, direction: Direction, size: u8) -> (u8, u8) {
    let along = if direction.toward_origin() {
        slot
    } else {
        size - 1 - slot
    };
    if direction.is_horizontal() {
        (along, line)
    } else {
        (line, along)
    }
}
