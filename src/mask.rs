//! A runtime-sized bitset over a `rows × cols` grid.
//!
//! Used for the hidden mine layout and for flood-fill bookkeeping. Cells are
//! packed row-major into `u64` words, so a 9×9 board fits in two words and
//! no heap growth happens after construction.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// Errors returned by mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Zero rows or columns, or more cells than `usize` can count.
    InvalidGrid { rows: usize, cols: usize },
    /// Row or column index is out of bounds.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::InvalidGrid { rows, cols } => {
                write!(f, "InvalidGrid: rows={}, cols={}", rows, cols)
            }
            MaskError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A set of grid positions stored as one bit per cell.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MineMask {
    rows: usize,
    cols: usize,
    words: Vec<u64>,
}

impl MineMask {
    /// Create an empty mask. Fails if either dimension is zero or the cell
    /// count overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MaskError> {
        let cells = match rows.checked_mul(cols) {
            Some(cells) if cells > 0 => cells,
            _ => return Err(MaskError::InvalidGrid { rows, cols }),
        };
        Ok(MineMask {
            rows,
            cols,
            words: vec![0; cells.div_ceil(WORD_BITS)],
        })
    }

    /// Creates a mask from an iterator over `(row, col)` positions.
    /// Repeated positions collapse into one.
    pub fn from_positions<I>(rows: usize, cols: usize, iter: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut mask = Self::new(rows, cols)?;
        for (r, c) in iter {
            mask.set(r, c)?;
        }
        Ok(mask)
    }

    /// `(rows, cols)` of the underlying grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells covered by the mask.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the number of set positions.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no positions are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, MaskError> {
        let idx = self.index(row, col)?;
        Ok((self.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 == 1)
    }

    /// Sets the bit at (row, col). Returns `true` if the bit was previously clear.
    pub fn set(&mut self, row: usize, col: usize) -> Result<bool, MaskError> {
        let idx = self.index(row, col)?;
        let word = &mut self.words[idx / WORD_BITS];
        let bit = 1u64 << (idx % WORD_BITS);
        let was_clear = *word & bit == 0;
        *word |= bit;
        Ok(was_clear)
    }

    /// Clears the bit at (row, col).
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        let idx = self.index(row, col)?;
        self.words[idx / WORD_BITS] &= !(1u64 << (idx % WORD_BITS));
        Ok(())
    }

    /// Iterator over the set positions in row-major order.
    pub fn iter_set_bits(&self) -> SetBits<'_> {
        SetBits { mask: self, idx: 0 }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, MaskError> {
        if row >= self.rows || col >= self.cols {
            Err(MaskError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.cols + col)
        }
    }
}

impl fmt::Debug for MineMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MineMask<{}x{}>:", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for MineMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set positions of a [`MineMask`].
#[derive(Clone, Copy)]
pub struct SetBits<'a> {
    mask: &'a MineMask,
    idx: usize,
}

impl Iterator for SetBits<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let cols = self.mask.cols;
        while self.idx < self.mask.cells() {
            let idx = self.idx;
            self.idx += 1;
            if (self.mask.words[idx / WORD_BITS] >> (idx % WORD_BITS)) & 1 == 1 {
                return Some((idx / cols, idx % cols));
            }
        }
        None
    }
}

/// Positions in the Moore neighbourhood of `(row, col)`, clipped to the grid.
/// No wraparound at the edges.
pub fn neighbors(
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (-1isize..=1)
        .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < rows && c < cols).then_some((r, c))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let n: Vec<_> = neighbors(9, 9, 0, 0).collect();
        assert_eq!(n, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(neighbors(9, 9, 4, 4).count(), 8);
    }

    #[test]
    fn single_row_clips_vertically() {
        let n: Vec<_> = neighbors(1, 5, 0, 2).collect();
        assert_eq!(n, vec![(0, 1), (0, 3)]);
    }

    #[test]
    fn spans_word_boundary() {
        let mut mask = MineMask::new(9, 9).unwrap();
        // index 63 and 64 straddle the first word
        assert!(mask.set(7, 0).unwrap());
        assert!(mask.set(7, 1).unwrap());
        assert!(!mask.set(7, 1).unwrap());
        assert_eq!(mask.count_ones(), 2);
        mask.clear(7, 0).unwrap();
        assert_eq!(mask.iter_set_bits().collect::<Vec<_>>(), vec![(7, 1)]);
    }
}
