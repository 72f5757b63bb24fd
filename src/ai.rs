// Deduction over the visible board: which unrevealed cells are provably safe
// or provably mined, using one numbered cell at a time.

use alloc::vec::Vec;

use crate::{
    board::Board,
    common::{BoardError, CellValue},
    mask::{neighbors, MineMask},
};

/// Cells proven safe or mined from the numbers currently on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deductions {
    pub safe: MineMask,
    pub mines: MineMask,
}

impl Deductions {
    /// First proven-safe cell in row-major order.
    pub fn first_safe(&self) -> Option<(usize, usize)> {
        self.safe.iter_set_bits().next()
    }
}

/// Apply the two single-cell rules until nothing new is learned:
/// a number equal to its known mines clears the rest of its hidden
/// neighbours, and a number equal to its hidden neighbours marks them all
/// as mines.
pub fn analyze(board: &Board) -> Result<Deductions, BoardError> {
    let (rows, cols) = board.dimensions();
    let mut safe = MineMask::new(rows, cols)?;
    let mut mines = MineMask::new(rows, cols)?;

    let mut changed = true;
    while changed {
        changed = false;
        for (r, c, value) in board.iter() {
            let Some(count) = value.adjacency() else {
                continue;
            };
            if count == 0 {
                continue;
            }
            let hidden: Vec<_> = neighbors(rows, cols, r, c)
                .filter(|&(nr, nc)| board.get(nr, nc) == Ok(CellValue::Unrevealed))
                .collect();
            let mut known = 0usize;
            for &(nr, nc) in &hidden {
                if mines.get(nr, nc)? {
                    known += 1;
                }
            }
            if known == count as usize {
                for &(nr, nc) in &hidden {
                    if !mines.get(nr, nc)? && safe.set(nr, nc)? {
                        changed = true;
                    }
                }
            } else if hidden.len() == count as usize {
                for &(nr, nc) in &hidden {
                    if mines.set(nr, nc)? {
                        changed = true;
                    }
                }
            }
        }
    }
    Ok(Deductions { safe, mines })
}
