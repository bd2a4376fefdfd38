//! Board tests - collision, locking and cascading line clears

use classic_tetris::core::{Board, Tetromino};
use classic_tetris::types::{ColorTag, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

fn fill_row_except(board: &mut Board, y: i32, gap_x: Option<i32>, color: ColorTag) {
    for x in 0..board.width() as i32 {
        if Some(x) != gap_x {
            board.set(x, y, Some(color));
        }
    }
}

fn has_full_row(board: &Board) -> bool {
    (0..board.height() as usize).any(|y| board.is_row_full(y))
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);

    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(6, 8);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(6, 0), None);
    assert_eq!(board.get(0, 8), None);
}

#[test]
fn test_collides_walls_floor_and_stack() {
    let mut board = Board::new(10, 20);
    board.set(4, 10, Some(ColorTag::Green));

    assert!(!board.collides(&[(0, 0), (9, 19)]));
    assert!(board.collides(&[(-1, 5)]));
    assert!(board.collides(&[(10, 5)]));
    assert!(board.collides(&[(3, 20)]));
    assert!(board.collides(&[(4, 10)]));
    // Above the top edge is open space
    assert!(!board.collides(&[(4, -1), (4, -3)]));
    assert!(board.collides(&[(-1, -1)]));
}

#[test]
fn test_lock_writes_color_and_skips_cells_above_board() {
    let mut board = Board::new(10, 20);
    board.lock(&[(2, -1), (2, 0), (3, 0), (3, 1)], ColorTag::Purple);

    assert_eq!(board.get(2, 0), Some(Some(ColorTag::Purple)));
    assert_eq!(board.get(3, 0), Some(Some(ColorTag::Purple)));
    assert_eq!(board.get(3, 1), Some(Some(ColorTag::Purple)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 3);
}

#[test]
fn test_single_line_completed_by_vertical_piece() {
    let mut board = Board::new(10, 20);
    fill_row_except(&mut board, 19, Some(9), ColorTag::Red);
    assert_eq!(board.clear_full_rows(), 0);

    // Vertical I dropped into the gap
    let piece = Tetromino {
        kind: PieceKind::I,
        rotation: 1,
        x: 7,
        y: 16,
    };
    assert!(piece.fits(&board));
    assert!(piece.try_move(&board, 0, 1).is_none());
    board.lock(&piece.cells(), piece.color());

    assert_eq!(board.clear_full_rows(), 1);
    assert!(board.row(19).unwrap()[..9].iter().all(|c| c.is_none()));
    assert_eq!(board.get(9, 19), Some(Some(ColorTag::Cyan)));
    assert_eq!(board.get(9, 18), Some(Some(ColorTag::Cyan)));
    assert_eq!(board.get(9, 17), Some(Some(ColorTag::Cyan)));
    assert_eq!(board.get(9, 16), Some(None));
}

#[test]
fn test_cascading_clear_preserves_order_of_survivors() {
    let mut board = Board::new(6, 10);
    // Rows 9, 7 and 6 full; rows 8 and 5 partial with distinct markers.
    fill_row_except(&mut board, 9, None, ColorTag::Red);
    fill_row_except(&mut board, 8, Some(0), ColorTag::Blue);
    fill_row_except(&mut board, 7, None, ColorTag::Red);
    fill_row_except(&mut board, 6, None, ColorTag::Red);
    fill_row_except(&mut board, 5, Some(5), ColorTag::Yellow);

    assert_eq!(board.clear_full_rows(), 3);
    assert!(!has_full_row(&board));

    let row9 = board.row(9).unwrap();
    assert_eq!(row9[0], None);
    assert_eq!(row9[1], Some(ColorTag::Blue));
    let row8 = board.row(8).unwrap();
    assert_eq!(row8[0], Some(ColorTag::Yellow));
    assert_eq!(row8[5], None);
    for y in 0..8 {
        assert!(board.row(y).unwrap().iter().all(|c| c.is_none()));
    }
}

#[test]
fn test_clear_count_matches_rows_removed() {
    let mut board = Board::new(4, 12);
    for y in [11, 10, 9, 8] {
        fill_row_except(&mut board, y, None, ColorTag::Orange);
    }
    board.set(1, 7, Some(ColorTag::Green));
    let before = board.cells().iter().filter(|c| c.is_some()).count();

    let cleared = board.clear_full_rows();

    assert_eq!(cleared, 4);
    let after = board.cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(before - after, cleared * 4);
    assert_eq!(board.get(1, 11), Some(Some(ColorTag::Green)));
}

#[test]
fn test_reset_empties_board() {
    let mut board = Board::new(5, 5);
    fill_row_except(&mut board, 4, Some(2), ColorTag::Red);
    board.reset();
    assert!(board.cells().iter().all(|c| c.is_none()));
    assert_eq!(board.to_rows().len(), 5);
}
