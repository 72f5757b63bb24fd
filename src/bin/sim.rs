use minesweeper::{
    init_logging, run_game, AiPlayer, Difficulty, GameConfig, GameStatus, Presenter, Seed,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <games> <seed> [low|medium|high]", args[0]);
        std::process::exit(1);
    }
    let games: u64 = args[1].parse()?;
    let seed: u64 = args[2].parse()?;
    let difficulty: Difficulty = match args.get(3) {
        Some(name) => name.parse()?,
        None => Difficulty::Low,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut won = 0u64;
    let mut lost = 0u64;
    let mut moves = 0usize;
    let mut guesses = 0usize;
    for game in 0..games {
        let config = GameConfig {
            difficulty,
            seed: Seed::Fixed(seed.wrapping_add(game)),
            ..GameConfig::default()
        };
        let mut presenter = Presenter::from_config(&config)?;
        let mut player = AiPlayer::new();
        let report = run_game(&mut presenter, &mut player, &mut rng, |_| {})?;
        match report.status {
            GameStatus::Won => won += 1,
            GameStatus::Lost => lost += 1,
            GameStatus::InProgress => {}
        }
        moves += report.moves;
        guesses += player.guesses();
    }

    let result = json!({
        "games": games,
        "difficulty": difficulty,
        "won": won,
        "lost": lost,
        "moves": moves,
        "guesses": guesses,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
