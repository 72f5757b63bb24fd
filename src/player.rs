use crate::{board::Board, common::RevealOutcome};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next cell to reveal, or `None` to abandon the game.
    fn select_cell(&mut self, rng: &mut SmallRng, board: &Board) -> Option<(usize, usize)>;

    /// Inform the player of the result of its last reveal.
    fn handle_reveal(&mut self, _coord: (usize, usize), _outcome: RevealOutcome) {}
}
