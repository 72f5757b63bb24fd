//! Narrow game interface for the rendering layer.
//!
//! A `Presenter` turns a difficulty and seed choice into a fresh [`Model`],
//! forwards reveal requests and answers the per-frame "is the game still
//! running, and did the player win" queries. There is no reset: a new game
//! is a new `Presenter`.

use crate::board::Board;
use crate::common::{BoardError, GameStatus, RevealOutcome};
use crate::config::{Difficulty, GameConfig, LossReveal, Seed};
use crate::mask::MineMask;
use crate::model::Model;

#[derive(Clone, Debug)]
pub struct Presenter {
    model: Model,
    difficulty: Difficulty,
    seed: u64,
    loss_reveal: LossReveal,
}

impl Presenter {
    /// Start a game on a `rows × cols` board.
    pub fn new(
        rows: usize,
        cols: usize,
        difficulty: Difficulty,
        seed: Seed,
    ) -> Result<Self, BoardError> {
        Self::from_config(&GameConfig {
            rows,
            cols,
            difficulty,
            seed,
            ..GameConfig::default()
        })
    }

    /// Start a game from a full configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, BoardError> {
        let seed = config.seed.resolve();
        let mines = config.mine_count()?;
        log::debug!(
            "new {}x{} game, difficulty {}, {} mines, seed {}",
            config.rows,
            config.cols,
            config.difficulty,
            mines,
            seed
        );
        let model = Model::new(config.rows, config.cols, mines, seed)?;
        Ok(Self {
            model,
            difficulty: config.difficulty,
            seed,
            loss_reveal: config.loss_reveal,
        })
    }

    /// Reveal (row, col). Ignored once the game is over.
    pub fn reveal(&mut self, row: usize, col: usize) -> Result<RevealOutcome, BoardError> {
        let outcome = self.model.reveal(row, col)?;
        if outcome == RevealOutcome::Detonated && self.loss_reveal == LossReveal::AllMines {
            let shown = self.model.reveal_mines()?;
            log::debug!("exposed {} remaining mines", shown);
        }
        Ok(outcome)
    }

    /// `true` while the game is neither won nor lost.
    pub fn continuing(&self) -> bool {
        !self.status().is_terminal()
    }

    /// `true` for a win, `false` for a loss. Only meaningful once
    /// [`continuing`](Self::continuing) is `false`; reads `false` before that.
    pub fn outcome(&self) -> bool {
        self.status() == GameStatus::Won
    }

    pub fn status(&self) -> GameStatus {
        self.model.status()
    }

    /// Read-only board for rendering.
    pub fn board(&self) -> &Board {
        self.model.board()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The generator seed actually used for this game.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn loss_reveal(&self) -> LossReveal {
        self.loss_reveal
    }

    pub fn mine_count(&self) -> usize {
        self.model.mine_count()
    }

    /// Hidden mine layout, for tests and post-game display.
    pub fn mines(&self) -> &MineMask {
        self.model.mines()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.board().dimensions()
    }
}
