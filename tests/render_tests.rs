use insta::assert_snapshot;

use sparselife::board::Board;
use sparselife::coord::Coord;
use sparselife::render::Frame;
use sparselife::viewport::Direction;
use sparselife::viewport::Viewport;

fn board_of(cells: &[(i64, i64)]) -> Board {
    let mut board = Board::new();

    for &(x, y) in cells {
        board.set_cell(Coord::new(x, y), true);
    }

    board
}

#[test]
fn test_rejects_empty_frame() {
    assert!(Frame::new(0, 4).is_err());
    assert!(Frame::new(2, 0).is_err());
    assert!(Frame::new(2, 4).is_ok());
}

#[test]
fn test_single_char_packing() {
    // One braille char covers a 2x4 cell window. (0,0) is the bottom-left
    // dot (0x40), (1,1) the right dot of the row above (0x20).
    let board = board_of(&[(0, 0), (1, 1)]);
    let view = Viewport::new(2, 4).unwrap();
    let mut frame = Frame::new(2, 4).unwrap();

    frame.draw(&board, &view);

    assert_snapshot!(frame.render().trim_end(), @"⡠");
}

#[test]
fn test_full_block_is_solid() {
    let mut board = Board::new();

    for y in 0..4 {
        for x in 0..2 {
            board.set_cell(Coord::new(x, y), true);
        }
    }

    let view = Viewport::new(2, 4).unwrap();
    let mut frame = Frame::new(2, 4).unwrap();

    frame.draw(&board, &view);

    assert_snapshot!(frame.render().trim_end(), @"⣿");
}

#[test]
fn test_blinker_row_packing() {
    // Horizontal blinker at y = 0 spans two braille chars on the bottom row.
    let board = board_of(&[(0, 0), (1, 0), (2, 0)]);
    let view = Viewport::new(4, 4).unwrap();
    let mut frame = Frame::new(4, 4).unwrap();

    frame.draw(&board, &view);

    assert_snapshot!(frame.render().trim_end(), @"⣀⡀");
}

#[test]
fn test_offscreen_cells_are_clipped() {
    let board = board_of(&[(100, 100), (-1, 0), (0, 4)]);
    let view = Viewport::new(2, 4).unwrap();
    let mut frame = Frame::new(2, 4).unwrap();

    frame.draw(&board, &view);

    assert_snapshot!(frame.render().trim_end(), @"⠀");
}

#[test]
fn test_pan_moves_content_into_view() {
    let board = board_of(&[(10, 20)]);
    let mut view = Viewport::new(2, 4).unwrap();
    let mut frame = Frame::new(2, 4).unwrap();

    view.pan(Direction::Right, 10);
    view.pan(Direction::Up, 20);

    frame.draw(&board, &view);

    // The cell lands on the view origin: bottom-left dot.
    assert_snapshot!(frame.render().trim_end(), @"⡀");
}

#[test]
fn test_reset_clears_previous_frame() {
    let board = board_of(&[(0, 0)]);
    let view = Viewport::new(2, 4).unwrap();
    let mut frame = Frame::new(2, 4).unwrap();

    frame.draw(&board, &view);
    assert_snapshot!(frame.render().trim_end(), @"⡀");

    frame.reset();
    frame.draw(&Board::new(), &view);
    assert_snapshot!(frame.render().trim_end(), @"⠀");
}
