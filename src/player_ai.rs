use alloc::vec::Vec;
use rand::{rngs::SmallRng, Rng};

use crate::{ai, board::Board, player::Player};

/// Computer player: plays a proven-safe cell when one exists, otherwise
/// guesses uniformly among hidden cells not known to be mines.
#[derive(Debug, Default)]
pub struct AiPlayer {
    guesses: usize,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves that were not backed by a deduction.
    pub fn guesses(&self) -> usize {
        self.guesses
    }
}

impl Player for AiPlayer {
    fn select_cell(&mut self, rng: &mut SmallRng, board: &Board) -> Option<(usize, usize)> {
        let deductions = ai::analyze(board).ok()?;
        if let Some(cell) = deductions.first_safe() {
            return Some(cell);
        }

        let hidden: Vec<_> = board
            .iter()
            .filter(|&(_, _, v)| !v.is_revealed())
            .map(|(r, c, _)| (r, c))
            .collect();
        let candidates: Vec<_> = hidden
            .iter()
            .copied()
            .filter(|&(r, c)| !deductions.mines.get(r, c).unwrap_or(false))
            .collect();
        // every hidden cell is a known mine only when the game is already decided
        let pool = if candidates.is_empty() { &hidden } else { &candidates };
        if pool.is_empty() {
            return None;
        }
        self.guesses += 1;
        Some(pool[rng.random_range(0..pool.len())])
    }
}
