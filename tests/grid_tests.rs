use tui_2048::core::{GameError, Grid};
use tui_2048::types::{Tile, MAX_GRID_SIZE};

#[test]
fn grid_size_limits() {
    assert!(Grid::new(0).is_err());
    assert!(Grid::new(1).is_ok());
    assert!(Grid::new(MAX_GRID_SIZE).is_ok());
    assert!(matches!(
        Grid::new(MAX_GRID_SIZE + 1),
        Err(GameError::InvalidConfiguration { .. })
    ));
}

#[test]
fn insert_rejects_bad_tiles() {
    let mut grid = Grid::new(4).unwrap();
    grid.insert(Tile::new(2, 1, 1)).unwrap();

    for bad in [
        Tile::new(2, 1, 1),
        Tile::new(2, 4, 0),
        Tile::new(3, 0, 0),
        Tile::new(1, 0, 0),
        Tile::new(0, 0, 0),
    ] {
        assert!(
            matches!(grid.insert(bad), Err(GameError::InvalidTile { .. })),
            "{bad} should be rejected"
        );
    }
    assert_eq!(grid.len(), 1);
}

#[test]
fn empty_cells_are_row_major() {
    let grid = Grid::from_rows([[2, 0], [0, 4]]).unwrap();
    assert_eq!(grid.empty_cells(), vec![(1, 0), (0, 1)]);
    assert!(!grid.is_full());
    assert_eq!(grid.max_value(), 4);
    assert_eq!(grid.total_value(), 6);
}

#[test]
fn from_rows_round_trips_values() {
    let rows = [[2, 0, 4], [0, 8, 0], [16, 0, 0]];
    let grid = Grid::from_rows(rows).unwrap();
    assert_eq!(grid.to_values(), vec![2, 0, 4, 0, 8, 0, 16, 0, 0]);
    assert_eq!(grid.tile_at(1, 1), Some(Tile::new(8, 1, 1)));
    assert_eq!(grid.tile_at(2, 2), None);
}

#[test]
fn grids_with_same_tiles_are_equal_in_any_order() {
    let forward = Grid::from_tiles(4, [Tile::new(2, 0, 0), Tile::new(4, 1, 0)]).unwrap();
    let reverse = Grid::from_tiles(4, [Tile::new(4, 1, 0), Tile::new(2, 0, 0)]).unwrap();
    assert_eq!(forward, reverse);
    assert_eq!(forward, Grid::from_rows([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap());

    let mut grown = reverse.clone();
    grown.insert(Tile::new(2, 3, 3)).unwrap();
    assert_ne!(forward, grown);
}
