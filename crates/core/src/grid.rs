//! Grid module - the tiles currently on the board
//!
//! The grid is a square of `size x size` cells holding an unordered collection of
//! tiles. At most one tile occupies a cell. Coordinates: (x, y) where x grows left
//! to right and y grows top to bottom, both in `0..size`.
//!
//! The grid carries no algorithm state: merge bookkeeping lives in the resolver.

use crate::error::GameError;
use crate::types::{Tile, MAX_GRID_SIZE, MAX_TILE_VALUE};

/// Square board of tiles.
#[derive(Debug, Clone)]
pub struct Grid {
    size: u8,
    tiles: Vec<Tile>,
}

/// Two grids are equal when they hold the same tiles, in any order.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.tiles.len() == other.tiles.len()
            && self
                .tiles
                .iter()
                .all(|t| other.tile_at(t.x, t.y) == Some(*t))
    }
}

impl Eq for Grid {}

impl Grid {
    /// Create an empty grid.
    ///
    /// Rejects a size of zero or one above `MAX_GRID_SIZE`.
    pub fn new(size: u8) -> Result<Self, GameError> {
        validate_size(size)?;
        Ok(Self {
            size,
            tiles: Vec::with_capacity(size as usize * size as usize),
        })
    }

    /// Create a grid holding the given tiles.
    ///
    /// Every tile is checked for range, value and overlap before the grid exists.
    pub fn from_tiles(size: u8, tiles: impl IntoIterator<Item = Tile>) -> Result<Self, GameError> {
        let mut grid = Self::new(size)?;
        for tile in tiles {
            grid.insert(tile)?;
        }
        Ok(grid)
    }

    /// Build a grid from rows of values, `0` meaning empty.
    ///
    /// Handy for tests and fixtures: `rows[y][x]` is the value at `(x, y)`.
    pub fn from_rows<const N: usize>(rows: [[u32; N]; N]) -> Result<Self, GameError> {
        let size = u8::try_from(N)
            .map_err(|_| GameError::config(format!("grid size {} is too large", N)))?;
        let mut grid = Self::new(size)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    grid.insert(Tile::new(value, x as u8, y as u8))?;
                }
            }
        }
        Ok(grid)
    }

    /// Trusted constructor for tiles produced by the resolver.
    pub(crate) fn from_parts(size: u8, tiles: Vec<Tile>) -> Self {
        debug_assert!(tiles.iter().all(|t| t.x < size && t.y < size));
        Self { size, tiles }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Read-only view of the tiles, in no particular order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// True when every cell holds a tile.
    pub fn is_full(&self) -> bool {
        self.tiles.len() >= self.cell_count()
    }

    pub fn tile_at(&self, x: u8, y: u8) -> Option<Tile> {
        self.tiles.iter().copied().find(|t| t.x == x && t.y == y)
    }

    pub fn is_occupied(&self, x: u8, y: u8) -> bool {
        self.tiles.iter().any(|t| t.x == x && t.y == y)
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: u8, y: u8) -> bool {
        x >= self.size || y >= self.size
    }

    /// Unoccupied cells in row-major order (y outer, x inner).
    pub fn empty_cells(&self) -> Vec<(u8, u8)> {
        let mut occupied = vec![false; self.cell_count()];
        for tile in &self.tiles {
            occupied[self.index(tile.x, tile.y)] = true;
        }

        let mut empty = Vec::with_capacity(self.cell_count() - self.tiles.len().min(self.cell_count()));
        for y in 0..self.size {
            for x in 0..self.size {
                if !occupied[self.index(x, y)] {
                    empty.push((x, y));
                }
            }
        }
        empty
    }

    /// Highest tile value, or 0 on an empty grid.
    pub fn max_value(&self) -> u32 {
        self.tiles.iter().map(|t| t.value).max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn total_value(&self) -> u64 {
        self.tiles.iter().map(|t| t.value as u64).sum()
    }

    /// Add a tile to the grid.
    ///
    /// Fails without modifying the grid if the tile is out of range, its value is
    /// not a power of two in `2..=MAX_TILE_VALUE`, or the cell is taken.
    pub fn insert(&mut self, tile: Tile) -> Result<(), GameError> {
        if self.is_out_of_bounds(tile.x, tile.y) {
            return Err(GameError::InvalidTile {
                tile,
                reason: "position is outside the grid",
            });
        }
        if tile.value < 2 || !tile.value.is_power_of_two() {
            return Err(GameError::InvalidTile {
                tile,
                reason: "value must be a power of two of at least 2",
            });
        }
        if tile.value > MAX_TILE_VALUE {
            return Err(GameError::InvalidTile {
                tile,
                reason: "value exceeds the largest tile",
            });
        }
        if self.is_occupied(tile.x, tile.y) {
            return Err(GameError::InvalidTile {
                tile,
                reason: "cell is already occupied",
            });
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Remove every tile.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Values in row-major order, `0` for an empty cell.
    pub fn to_values(&self) -> Vec<u32> {
        let mut cells = vec![0; self.cell_count()];
        self.write_values(&mut cells);
        cells
    }

    /// Write row-major values into `out`, which must hold `size * size` cells.
    pub fn write_values(&self, out: &mut [u32]) {
        out.fill(0);
        for tile in &self.tiles {
            let idx = self.index(tile.x, tile.y);
            if let Some(cell) = out.get_mut(idx) {
                *cell = tile.value;
            }
        }
    }

    /// Tiles sorted row-major, for stable comparisons and output.
    pub fn sorted_tiles(&self) -> Vec<Tile> {
        let mut tiles = self.tiles.clone();
        tiles.sort_by_key(|t| (t.y, t.x));
        tiles
    }

    #[inline(always)]
    fn index(&self, x: u8, y: u8) -> usize {
        (y as usize) * (self.size as usize) + (x as usize)
    }
}

pub(crate) fn validate_size(size: u8) -> Result<(), GameError> {
    if size == 0 {
        return Err(GameError::config("grid size must be at least 1"));
    }
    if size > MAX_GRID_SIZE {
        return Err(GameError::config(format!(
            "grid size {size} exceeds the maximum of {MAX_GRID_SIZE}"
        )));
    }
    Ok(())
}
