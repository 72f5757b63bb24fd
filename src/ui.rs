#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{board::Board, common::GameStatus, presenter::Presenter};

/// Column label used by the text interface: `A`, `B`, ...
pub fn column_label(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Render the board with column letters across the top and 1-based row numbers.
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..board.cols() {
        let _ = write!(out, " {}", column_label(c));
    }
    out.push('\n');
    for r in 0..board.rows() {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..board.cols() {
            let ch = board.get(r, c).map(|v| v.symbol()).unwrap_or('?');
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

pub fn print_board(board: &Board) {
    std::print!("{}", format_board(board));
}

/// One-line summary of the game shown under the board.
pub fn status_line(presenter: &Presenter) -> String {
    let (rows, cols) = presenter.dimensions();
    match presenter.status() {
        GameStatus::InProgress => std::format!(
            "{} mines, {} of {} cells open",
            presenter.mine_count(),
            presenter.board().revealed_count(),
            rows * cols
        ),
        GameStatus::Won => String::from("Congratulations, you won the game"),
        GameStatus::Lost => String::from("Boom. You hit a mine"),
    }
}

pub fn print_player_view(presenter: &Presenter) {
    std::println!();
    print_board(presenter.board());
    std::println!("{}", status_line(presenter));
}
