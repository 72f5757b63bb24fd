#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::RevealOutcome,
    player::Player,
    ui::column_label,
};
use rand::rngs::SmallRng;

/// Human player reading coordinates such as `B3` from a line-based input.
pub struct CliPlayer<R> {
    input: R,
}

impl CliPlayer<io::StdinLock<'static>> {
    pub fn new() -> Self {
        Self::with_input(io::stdin().lock())
    }
}

impl Default for CliPlayer<io::StdinLock<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn with_input(input: R) -> Self {
        Self { input }
    }
}

pub fn coord_to_string(r: usize, c: usize) -> String {
    std::format!("{}{}", column_label(c), r + 1)
}

/// Parse `<column letter><1-based row>`, e.g. `A1` or `c7`.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn select_cell(&mut self, _rng: &mut SmallRng, board: &Board) -> Option<(usize, usize)> {
        let (rows, cols) = board.dimensions();
        loop {
            print!("Reveal cell (e.g. A1, q to quit): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return None;
            }
            match parse_coord(line) {
                Some((r, c)) if r < rows && c < cols => {
                    if board.get(r, c).map(|v| v.is_revealed()).unwrap_or(false) {
                        println!("{} is already open.", coord_to_string(r, c));
                        continue;
                    }
                    return Some((r, c));
                }
                Some(_) => println!(
                    "Outside the board: columns A-{}, rows 1-{}.",
                    column_label(cols - 1),
                    rows
                ),
                None => println!("Could not read '{}'.", line),
            }
        }
    }

    fn handle_reveal(&mut self, coord: (usize, usize), outcome: RevealOutcome) {
        if let RevealOutcome::Cleared { revealed } = outcome {
            if revealed > 1 {
                println!("{} opened {} cells.", coord_to_string(coord.0, coord.1), revealed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn parse_coordinates() {
        assert_eq!(parse_coord("A1"), Some((0, 0)));
        assert_eq!(parse_coord("c7"), Some((6, 2)));
        assert_eq!(parse_coord(" I9 "), Some((8, 8)));
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("11"), None);
        assert_eq!(parse_coord("B"), None);
    }

    #[test]
    fn skips_invalid_lines_until_valid_cell() {
        let board = Board::new(9, 9).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut player = CliPlayer::with_input(&b"zz\nK1\nB3\n"[..]);
        assert_eq!(player.select_cell(&mut rng, &board), Some((2, 1)));
        assert_eq!(player.select_cell(&mut rng, &board), None);
    }

    #[test]
    fn stdin_player_is_default_constructible() {
        fn check<P: Default + Player>() {}
        check::<CliPlayer<io::StdinLock<'static>>>();
    }

    #[test]
    fn quit_ends_input() {
        let board = Board::new(9, 9).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut player = CliPlayer::with_input(&b"q\nA1\n"[..]);
        assert_eq!(player.select_cell(&mut rng, &board), None);
    }
}
