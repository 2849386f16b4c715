use tui_2048::core::{GameSession, Grid, SimpleRng};
use tui_2048::term::{GameView, Viewport};

fn all_text(fb: &tui_2048::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let session = GameSession::new(4, SimpleRng::new(1)).unwrap();
    let view = GameView::default();

    // 4 tiles of 7x3 with separators => 33x17, plus border => 35x19.
    let (w, h) = view.board_extent(4);
    let fb = view.render(&session.snapshot(), Viewport::new(w, h));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(w - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, h - 1).unwrap().ch, '└');
    assert_eq!(fb.get(w - 1, h - 1).unwrap().ch, '┘');
}

#[test]
fn term_view_shows_tile_values_and_panel() {
    let grid = Grid::from_rows([[2048, 0, 0, 0], [0, 16, 0, 0], [0; 4], [0; 4]]).unwrap();
    let session = GameSession::from_grid(grid, SimpleRng::new(1)).unwrap();

    let fb = GameView::default().render(&session.snapshot(), Viewport::new(80, 24));
    let text = all_text(&fb);
    assert!(text.contains("2048"));
    assert!(text.contains("16"));
    assert!(text.contains("SCORE"));
    assert!(text.contains("BEST TILE"));
    assert!(text.contains("YOU WIN!"));
}

#[test]
fn term_view_shows_game_over() {
    let grid = Grid::from_rows([[2, 4], [4, 2]]).unwrap();
    let session = GameSession::from_grid(grid, SimpleRng::new(1)).unwrap();

    let fb = GameView::default().render(&session.snapshot(), Viewport::new(60, 20));
    assert!(all_text(&fb).contains("GAME OVER"));
}
