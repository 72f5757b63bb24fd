//! Game model: hidden mine layout, adjacency arithmetic and reveal propagation.

use alloc::collections::VecDeque;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::common::{cell_count, BoardError, CellValue, GameStatus, RevealOutcome};
use crate::mask::{neighbors, MineMask};

/// Owns the display board and the mine layout it hides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    board: Board,
    mines: MineMask,
    revealed_safe: usize,
    detonated: Option<(usize, usize)>,
}

impl Model {
    /// Build a model whose `mine_count` mines are placed by a generator seeded with `seed`.
    pub fn new(rows: usize, cols: usize, mine_count: usize, seed: u64) -> Result<Self, BoardError> {
        check_config(rows, cols, mine_count)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mines = place_mines(rows, cols, mine_count, &mut rng)?;
        Self::with_layout(mines)
    }

    /// Build a model over an explicit mine layout.
    pub fn with_layout(mines: MineMask) -> Result<Self, BoardError> {
        let (rows, cols) = mines.dimensions();
        check_config(rows, cols, mines.count_ones())?;
        Ok(Self {
            board: Board::new(rows, cols)?,
            mines,
            revealed_safe: 0,
            detonated: None,
        })
    }

    /// Read-only display board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The hidden mine layout.
    pub fn mines(&self) -> &MineMask {
        &self.mines
    }

    pub fn mine_count(&self) -> usize {
        self.mines.count_ones()
    }

    /// Number of cells without a mine.
    pub fn safe_cells(&self) -> usize {
        self.mines.cells() - self.mine_count()
    }

    pub fn is_mine(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.mines.get(row, col)?)
    }

    /// The mine that ended the game, if any.
    pub fn detonated(&self) -> Option<(usize, usize)> {
        self.detonated
    }

    /// Game status derived from the detonated mine and the revealed safe cells.
    pub fn status(&self) -> GameStatus {
        if self.detonated.is_some() {
            GameStatus::Lost
        } else if self.revealed_safe == self.safe_cells() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Number of mines around (row, col), clipped at the grid edges.
    pub fn adjacency(&self, row: usize, col: usize) -> Result<u8, BoardError> {
        self.board.get(row, col)?;
        let (rows, cols) = self.board.dimensions();
        let count = neighbors(rows, cols, row, col)
            .filter(|&(r, c)| self.mines.get(r, c).unwrap_or(false))
            .count();
        // at most 8 neighbours
        Ok(count as u8)
    }

    /// Reveal (row, col).
    ///
    /// A mine loses the game. A safe cell with no adjacent mines floods
    /// outward through its zero-adjacency region and stops at the first ring
    /// of numbered cells. Revealed cells and finished games are no-ops.
    pub fn reveal(&mut self, row: usize, col: usize) -> Result<RevealOutcome, BoardError> {
        let current = self.board.get(row, col)?;
        if self.status().is_terminal() {
            log::trace!("reveal ({}, {}) ignored, game is over", row, col);
            return Ok(RevealOutcome::Ignored);
        }
        if current.is_revealed() {
            return Ok(RevealOutcome::AlreadyRevealed);
        }
        if self.mines.get(row, col)? {
            self.board.set(row, col, CellValue::Mine)?;
            self.detonated = Some((row, col));
            log::info!("mine detonated at ({}, {})", row, col);
            return Ok(RevealOutcome::Detonated);
        }

        let revealed = self.flood_reveal(row, col)?;
        self.revealed_safe += revealed;
        log::debug!(
            "revealed {} cells from ({}, {}), {} of {} safe cells open",
            revealed,
            row,
            col,
            self.revealed_safe,
            self.safe_cells()
        );
        if self.status() == GameStatus::Won {
            log::info!("all safe cells revealed");
        }
        Ok(RevealOutcome::Cleared { revealed })
    }

    /// Expose every mine on the board. Used after a loss; returns the number
    /// of cells that changed.
    pub fn reveal_mines(&mut self) -> Result<usize, BoardError> {
        let mut changed = 0;
        for (r, c) in self.mines.iter_set_bits() {
            if self.board.get(r, c)? != CellValue::Mine {
                self.board.set(r, c, CellValue::Mine)?;
                changed += 1;
            }
        }
        Ok(changed)
    }

    fn flood_reveal(&mut self, row: usize, col: usize) -> Result<usize, BoardError> {
        let (rows, cols) = self.board.dimensions();
        let mut queued = MineMask::new(rows, cols)?;
        let mut pending = VecDeque::new();
        queued.set(row, col)?;
        pending.push_back((row, col));

        let mut revealed = 0;
        while let Some((r, c)) = pending.pop_front() {
            let adjacent = self.adjacency(r, c)?;
            self.board.set(r, c, CellValue::from_adjacency(adjacent))?;
            revealed += 1;
            if adjacent != 0 {
                continue;
            }
            for (nr, nc) in neighbors(rows, cols, r, c) {
                if self.board.get(nr, nc)?.is_revealed() || self.mines.get(nr, nc)? {
                    continue;
                }
                if queued.set(nr, nc)? {
                    pending.push_back((nr, nc));
                }
            }
        }
        Ok(revealed)
    }
}

/// Place `count` distinct mines on a `rows × cols` grid by drawing uniform
/// positions from `rng` and skipping duplicates.
pub fn place_mines<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    count: usize,
    rng: &mut R,
) -> Result<MineMask, BoardError> {
    check_config(rows, cols, count)?;
    let mut mines = MineMask::new(rows, cols)?;
    let mut placed = 0;
    let mut draws = 0usize;
    while placed < count {
        let r = rng.random_range(0..rows);
        let c = rng.random_range(0..cols);
        draws += 1;
        if mines.set(r, c)? {
            placed += 1;
        }
    }
    log::debug!(
        "placed {} mines on {}x{} in {} draws",
        count,
        rows,
        cols,
        draws
    );
    Ok(mines)
}

fn check_config(rows: usize, cols: usize, mines: usize) -> Result<(), BoardError> {
    let cells = cell_count(rows, cols)?;
    if mines >= cells {
        return Err(BoardError::TooManyMines { mines, cells });
    }
    Ok(())
}
