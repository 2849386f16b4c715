//! Tile spawning
//!
//! Picks an empty cell uniformly at random and a value of 2 (nine in ten) or 4.
//! The grid is only read; the caller inserts the returned tile.

use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::{Tile, SPAWN_FOUR_ODDS, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE};

/// Choose a new tile for `grid`, or `None` when every cell is taken.
pub fn spawn<R: RandomSource + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Tile> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (x, y) = empty[rng.next_below(empty.len() as u32) as usize];
    Some(Tile::new(spawn_value(rng), x, y))
}

/// Draw a spawn value: 4 with probability `1 / SPAWN_FOUR_ODDS`, else 2.
pub fn spawn_value<R: RandomSource + ?Sized>(rng: &mut R) -> u32 {
    if rng.next_below(SPAWN_FOUR_ODDS) == 0 {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    /// Replays a fixed list of draws.
    struct Scripted(Vec<u32>);

    impl RandomSource for Scripted {
        fn next_below(&mut self, bound: u32) -> u32 {
            self.0.remove(0) % bound
        }
    }

    #[test]
    fn test_spawn_on_full_grid_is_none() {
        let grid = Grid::from_rows([[2, 4], [8, 16]]).unwrap();
        let mut rng = SimpleRng::new(1);
        assert_eq!(spawn(&grid, &mut rng), None);
    }

    #[test]
    fn test_spawn_indexes_row_major_empty_cells() {
        let grid = Grid::from_rows([[2, 0], [0, 0]]).unwrap();
        // Empty cells: (1,0), (0,1), (1,1). Pick index 2, then a non-zero value draw.
        let mut rng = Scripted(vec![2, 5]);
        assert_eq!(spawn(&grid, &mut rng), Some(Tile::new(2, 1, 1)));
    }

    #[test]
    fn test_spawn_four_on_zero_draw() {
        let grid = Grid::new(2).unwrap();
        let mut rng = Scripted(vec![0, 0]);
        assert_eq!(spawn(&grid, &mut rng), Some(Tile::new(4, 0, 0)));
    }

    #[test]
    fn test_spawn_does_not_touch_grid() {
        let grid = Grid::from_rows([[2, 0], [0, 0]]).unwrap();
        let before = grid.clone();
        let mut rng = SimpleRng::new(3);
        let _ = spawn(&grid, &mut rng);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_value_distribution_is_roughly_ninety_ten() {
        let mut rng = SimpleRng::new(2024);
        let fours = (0..10_000)
            .filter(|_| spawn_value(&mut rng) == SPAWN_HIGH_VALUE)
            .count();
        assert!((700..=1300).contains(&fours), "fours = {}", fours);
    }
}
