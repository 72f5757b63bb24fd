use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;

pub const BOARD_ROWS: usize = 9;
pub const BOARD_COLS: usize = 9;

/// Seed used for reproducible "seed zero" games.
pub const SEED_ZERO: u64 = 0;

/// Mine density per difficulty, in percent of the board's cells.
pub const DENSITY_PERCENT: [usize; 3] = [12, 18, 25];

/// Difficulty preset. Higher presets place more mines on the same grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    #[default]
    Low,
    Medium,
    High,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Medium, Difficulty::High];

    /// Mine density in percent.
    pub const fn density_percent(self) -> usize {
        DENSITY_PERCENT[self as usize]
    }

    /// Number of mines for a `rows × cols` board, rounded up.
    /// A 9×9 board gets 10, 15 and 21 mines. `None` if the cell count
    /// overflows.
    pub const fn mine_count(self, rows: usize, cols: usize) -> Option<usize> {
        let Some(cells) = rows.checked_mul(cols) else {
            return None;
        };
        let pct = self.density_percent();
        // ceil(cells * pct / 100) without the intermediate product
        Some(cells / 100 * pct + (cells % 100 * pct).div_ceil(100))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let is = |name: &str| s.eq_ignore_ascii_case(name);
        if is("low") || is("easy") {
            Ok(Difficulty::Low)
        } else if is("medium") {
            Ok(Difficulty::Medium)
        } else if is("high") || is("hard") {
            Ok(Difficulty::High)
        } else {
            Err(UnknownDifficulty)
        }
    }
}

/// Returned when a difficulty name does not match any preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDifficulty;

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of: low, medium, high")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownDifficulty {}

/// Where the mine-placement seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// [`SEED_ZERO`]: identical layout every game.
    #[default]
    Zero,
    /// Caller-chosen seed.
    Fixed(u64),
    /// Derived from the system clock, different every game.
    #[cfg(feature = "std")]
    TimeOfDay,
}

impl Seed {
    /// The concrete generator seed.
    pub fn resolve(self) -> u64 {
        match self {
            Seed::Zero => SEED_ZERO,
            Seed::Fixed(seed) => seed,
            #[cfg(feature = "std")]
            Seed::TimeOfDay => clock_seed(),
        }
    }
}

#[cfg(feature = "std")]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(SEED_ZERO)
}

/// What the board shows after a mine is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum LossReveal {
    /// Only the detonated mine is shown.
    #[default]
    TriggeredOnly,
    /// Every mine is exposed once the game is lost.
    AllMines,
}

/// Everything needed to start a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub difficulty: Difficulty,
    pub seed: Seed,
    pub loss_reveal: LossReveal,
}

impl GameConfig {
    pub fn mine_count(&self) -> Result<usize, BoardError> {
        self.difficulty
            .mine_count(self.rows, self.cols)
            .ok_or(BoardError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            difficulty: Difficulty::default(),
            seed: Seed::default(),
            loss_reveal: LossReveal::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_on_default_board() {
        let counts: Vec<_> = Difficulty::ALL
            .iter()
            .map(|d| d.mine_count(BOARD_ROWS, BOARD_COLS))
            .collect();
        assert_eq!(counts, vec![Some(10), Some(15), Some(21)]);
    }

    #[test]
    fn mine_count_rounds_up_without_overflow() {
        assert_eq!(Difficulty::Low.mine_count(10, 10), Some(12));
        assert_eq!(Difficulty::High.mine_count(1, 3), Some(1));
        assert_eq!(Difficulty::Low.mine_count(usize::MAX / 2, 3), None);
        let big = Difficulty::High.mine_count(usize::MAX, 1).unwrap();
        assert_eq!(big, usize::MAX / 4 + 1);
    }

    #[test]
    fn parse_difficulty() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::High));
        assert_eq!("medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn fixed_seeds_resolve_verbatim() {
        assert_eq!(Seed::Zero.resolve(), SEED_ZERO);
        assert_eq!(Seed::Fixed(77).resolve(), 77);
    }
}
