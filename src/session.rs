//! Drives one game: a [`Player`] picks cells, the [`Presenter`] applies them.

use rand::rngs::SmallRng;

use crate::{
    common::{BoardError, GameStatus},
    player::Player,
    presenter::Presenter,
};

/// Summary of a finished (or abandoned) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameReport {
    pub status: GameStatus,
    pub moves: usize,
    pub revealed: usize,
    pub mines: usize,
    pub seed: u64,
}

/// Play until the game ends or the player gives up. `on_turn` sees the
/// presenter before every move and once more at the end.
pub fn run_game<P, F>(
    presenter: &mut Presenter,
    player: &mut P,
    rng: &mut SmallRng,
    mut on_turn: F,
) -> Result<GameReport, BoardError>
where
    P: Player + ?Sized,
    F: FnMut(&Presenter),
{
    let mut moves = 0;
    while presenter.continuing() {
        on_turn(presenter);
        let Some((row, col)) = player.select_cell(rng, presenter.board()) else {
            log::info!("player left after {} moves", moves);
            break;
        };
        let outcome = presenter.reveal(row, col)?;
        moves += 1;
        player.handle_reveal((row, col), outcome);
    }
    on_turn(presenter);

    Ok(GameReport {
        status: presenter.status(),
        moves,
        revealed: presenter.board().revealed_count(),
        mines: presenter.mine_count(),
        seed: presenter.seed(),
    })
}
