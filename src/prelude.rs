//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, BoardError, CellValue, Difficulty, GameConfig, GameStatus, LossReveal,
    Player, Presenter, RevealOutcome, Seed,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_player_view, CliPlayer};
