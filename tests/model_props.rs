use minesweeper::{CellValue, GameStatus, Model, RevealOutcome};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Reveal random cells until the game ends.
fn play_out(model: &mut Model, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let (rows, cols) = model.board().dimensions();
    while model.status() == GameStatus::InProgress {
        let r = rng.random_range(0..rows);
        let c = rng.random_range(0..cols);
        model.reveal(r, c).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn layout_is_deterministic(
        seed in any::<u64>(),
        rows in 1usize..16,
        cols in 1usize..16,
        density in 0usize..100,
    ) {
        let cells = rows * cols;
        let mines = (cells * density / 100).min(cells - 1);
        let a = Model::new(rows, cols, mines, seed).unwrap();
        let b = Model::new(rows, cols, mines, seed).unwrap();
        prop_assert_eq!(a.mines(), b.mines());
        prop_assert_eq!(a.mine_count(), mines);
    }

    #[test]
    fn reveal_is_idempotent(seed in any::<u64>(), row in 0usize..9, col in 0usize..9) {
        let mut model = Model::new(9, 9, 10, seed).unwrap();
        model.reveal(row, col).unwrap();
        let once = model.board().clone();
        let again = model.reveal(row, col).unwrap();
        prop_assert!(!again.changed_board());
        prop_assert_eq!(model.board(), &once);
    }

    #[test]
    fn flood_fill_never_reveals_mines(seed in any::<u64>(), row in 0usize..9, col in 0usize..9) {
        let mut model = Model::new(9, 9, 15, seed).unwrap();
        if model.is_mine(row, col).unwrap() {
            return Ok(());
        }
        model.reveal(row, col).unwrap();
        for (r, c, value) in model.board().iter() {
            if model.is_mine(r, c).unwrap() {
                prop_assert_eq!(value, CellValue::Unrevealed);
            } else if value.is_revealed() {
                prop_assert_eq!(value, CellValue::from_adjacency(model.adjacency(r, c).unwrap()));
            }
        }
    }

    #[test]
    fn game_always_terminates_consistently(seed in any::<u64>(), mines in 0usize..30) {
        let mut model = Model::new(9, 9, mines, seed).unwrap();
        play_out(&mut model, seed);
        let revealed_safe = model
            .board()
            .iter()
            .filter(|&(r, c, v)| v.is_revealed() && !model.is_mine(r, c).unwrap())
            .count();
        match model.status() {
            GameStatus::Won => {
                prop_assert_eq!(revealed_safe, 81 - mines);
                prop_assert_eq!(model.detonated(), None);
            }
            GameStatus::Lost => {
                let (r, c) = model.detonated().unwrap();
                prop_assert_eq!(model.board().get(r, c).unwrap(), CellValue::Mine);
                prop_assert!(revealed_safe < 81 - mines);
            }
            GameStatus::InProgress => prop_assert!(false, "game did not finish"),
        }
        let frozen = model.board().clone();
        prop_assert_eq!(model.reveal(0, 0).unwrap(), RevealOutcome::Ignored);
        prop_assert_eq!(model.board(), &frozen);
    }
}
