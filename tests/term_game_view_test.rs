use tui_snake::core::GameState;
use tui_snake::term::{AnchorY, GameView, Rgb, Viewport};
use tui_snake::types::{Cell, Direction};

// 32x24 cells at 2x1 terminal cells each, plus border.
const FRAME_W: u16 = 66;
const FRAME_H: u16 = 26;

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::with_seed(1).snapshot();
    let view = GameView::default();
    assert_eq!(view.frame_size(&snap), (FRAME_W, FRAME_H));

    let fb = view.render(&snap, Viewport::new(FRAME_W, FRAME_H));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(FRAME_W - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, FRAME_H - 1).unwrap().ch, '└');
    assert_eq!(fb.get(FRAME_W - 1, FRAME_H - 1).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_head_body_and_food_two_chars_wide() {
    let mut state = GameState::with_seed(1);
    assert!(state.force_food(Cell::new(0, 0)));
    let snap = state.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(FRAME_W, FRAME_H));

    // Head at grid (16, 12) -> terminal x = 1 + 16 * 2, y = 1 + 12.
    for x in [33, 34] {
        let cell = fb.get(x, 13).unwrap();
        assert_eq!(cell.ch, '█');
        assert!(cell.style.bold);
        assert_eq!(cell.style.fg, Rgb::new(0, 100, 255));
    }
    for x in [29, 30, 31, 32] {
        let cell = fb.get(x, 13).unwrap();
        assert_eq!(cell.ch, '▓');
        assert_eq!(cell.style.fg, Rgb::new(0, 0, 255));
    }

    let food = fb.get(1, 1).unwrap();
    assert_eq!(food.ch, '█');
    assert_eq!(food.style.fg, Rgb::new(200, 0, 0));
    assert_eq!(fb.get(2, 1).unwrap().ch, '█');
    assert_eq!(fb.get(3, 1).unwrap().ch, ' ');
}

#[test]
fn term_view_shows_score_on_top_border() {
    let mut state = GameState::with_seed(1);
    let ahead = state.head().translated(Direction::Right, 20);
    assert!(state.force_food(ahead));
    state.step();

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(FRAME_W, FRAME_H));
    assert!(fb.row_text(0).contains(" Score: 1 "));
}

#[test]
fn term_view_side_panel_needs_room() {
    let snap = GameState::with_seed(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let narrow = view.render(&snap, Viewport::new(FRAME_W, FRAME_H));
    assert!(!(0..FRAME_H).any(|y| narrow.row_text(y).contains("LENGTH")));

    let wide = view.render(&snap, Viewport::new(FRAME_W + 14, FRAME_H));
    assert!(wide.row_text(0).contains("SCORE"));
    assert!(wide.row_text(3).contains("LENGTH"));
    assert!(wide.row_text(4).contains('3'));
    assert!(wide.row_text(6).contains("STEPS"));
}

#[test]
fn term_view_overlays_end_of_game() {
    let mut state = GameState::with_seed(1);
    assert!(state.force_food(Cell::new(0, 0)));
    state.step();
    state.set_heading(Direction::Left);
    assert!(state.step().terminal);

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(FRAME_W, FRAME_H));
    assert!(fb.row_text(FRAME_H / 2).contains("GAME OVER"));

    let mut won = GameState::new(80, 20, 3).unwrap();
    assert!(won.step().terminal);
    let fb = GameView::default().render(&won.snapshot(), Viewport::new(40, 10));
    assert!((0..10).any(|y| fb.row_text(y).contains("BOARD CLEARED")));
}
