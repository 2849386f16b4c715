//! Snapshot module - fixed-size copy of a session for rendering and adapters

use crate::types::{GameStatus, MAX_GRID_SIZE};

const MAX_CELLS: usize = MAX_GRID_SIZE as usize * MAX_GRID_SIZE as usize;

/// Read-only copy of a session for presentation layers.
///
/// `cells` is row-major with `0` for empty; only the first `size * size` entries
/// are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: u8,
    pub cells: [u32; MAX_CELLS],
    pub score: u32,
    pub status: GameStatus,
    pub moves: u32,
    pub max_tile: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = 0;
        self.cells = [0; MAX_CELLS];
        self.score = 0;
        self.status = GameStatus::Active;
        self.moves = 0;
        self.max_tile = 0;
    }

    /// Value at `(x, y)`, `0` for empty or out of range.
    pub fn value_at(&self, x: u8, y: u8) -> u32 {
        if x >= self.size || y >= self.size {
            return 0;
        }
        self.cells[y as usize * self.size as usize + x as usize]
    }

    /// The meaningful prefix of `cells`.
    pub fn values(&self) -> &[u32] {
        let n = self.size as usize * self.size as usize;
        &self.cells[..n]
    }

    pub fn empty_count(&self) -> usize {
        self.values().iter().filter(|&&v| v == 0).count()
    }

    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            size: 0,
            cells: [0; MAX_CELLS],
            score: 0,
            status: GameStatus::Active,
            moves: 0,
            max_tile: 0,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_respects_size() {
        let mut snap = GameSnapshot::default();
        snap.size = 2;
        snap.cells[..4].copy_from_slice(&[2, 0, 0, 4]);

        assert_eq!(snap.value_at(0, 0), 2);
        assert_eq!(snap.value_at(1, 1), 4);
        assert_eq!(snap.value_at(2, 0), 0);
        assert_eq!(snap.values(), &[2, 0, 0, 4]);
        assert_eq!(snap.empty_count(), 2);
    }

    #[test]
    fn test_default_is_playable_and_empty() {
        let snap = GameSnapshot::default();
        assert!(snap.playable());
        assert!(snap.values().is_empty());
    }
}
