use minesweeper::{Board, BoardError, CellValue};

#[test]
fn new_board_is_unrevealed() {
    let board = Board::new(9, 9).unwrap();
    assert_eq!(board.dimensions(), (9, 9));
    assert_eq!(board.revealed_count(), 0);
    assert!(board.iter().all(|(_, _, v)| v == CellValue::Unrevealed));
    assert_eq!(board.iter().count(), 81);
}

#[test]
fn zero_dimensions_rejected() {
    assert_eq!(
        Board::new(0, 9).unwrap_err(),
        BoardError::InvalidDimensions { rows: 0, cols: 9 }
    );
    assert_eq!(
        Board::new(4, 0).unwrap_err(),
        BoardError::InvalidDimensions { rows: 4, cols: 0 }
    );
}

#[test]
fn overflowing_dimensions_rejected() {
    assert_eq!(
        Board::new(usize::MAX / 2, 3).unwrap_err(),
        BoardError::InvalidDimensions { rows: usize::MAX / 2, cols: 3 }
    );
}

#[test]
fn set_rejects_counts_outside_one_to_eight() {
    let mut board = Board::new(3, 3).unwrap();
    assert_eq!(
        board.set(1, 1, CellValue::Count(0)).unwrap_err(),
        BoardError::InvalidCount { row: 1, col: 1, count: 0 }
    );
    assert_eq!(
        board.set(0, 2, CellValue::Count(9)).unwrap_err(),
        BoardError::InvalidCount { row: 0, col: 2, count: 9 }
    );
    assert_eq!(
        board.set(2, 0, CellValue::Count(255)).unwrap_err(),
        BoardError::InvalidCount { row: 2, col: 0, count: 255 }
    );
    assert_eq!(board.revealed_count(), 0);
    board.set(1, 1, CellValue::Count(8)).unwrap();
    board.set(0, 0, CellValue::Count(1)).unwrap();
    assert_eq!(board.to_string(), "1..\n.8.\n...");
}

#[test]
fn out_of_range_count_symbol_does_not_overflow() {
    assert_eq!(CellValue::Count(255).symbol(), '?');
    assert_eq!(CellValue::Count(7).symbol(), '7');
}

#[test]
fn get_and_set_are_bounds_checked() {
    let mut board = Board::new(3, 5).unwrap();
    assert_eq!(
        board.get(3, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 3, col: 0 }
    );
    assert_eq!(
        board.get(0, 5).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 5 }
    );
    assert_eq!(
        board.set(7, 7, CellValue::Empty).unwrap_err(),
        BoardError::OutOfBounds { row: 7, col: 7 }
    );
    board.set(2, 4, CellValue::Count(3)).unwrap();
    assert_eq!(board.get(2, 4).unwrap(), CellValue::Count(3));
    assert_eq!(board.revealed_count(), 1);
}

#[test]
fn iter_is_row_major() {
    let mut board = Board::new(2, 3).unwrap();
    board.set(1, 0, CellValue::Mine).unwrap();
    let cells: Vec<_> = board.iter().map(|(r, c, _)| (r, c)).collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(board.iter().nth(3).unwrap().2, CellValue::Mine);
}

#[test]
fn display_uses_cell_symbols() {
    let mut board = Board::new(2, 2).unwrap();
    board.set(0, 0, CellValue::Count(1)).unwrap();
    board.set(1, 1, CellValue::Mine).unwrap();
    board.set(0, 1, CellValue::Empty).unwrap();
    assert_eq!(board.to_string(), "1 \n.*");
}
