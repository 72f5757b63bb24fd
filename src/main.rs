use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use minesweeper::{
    init_logging, print_player_view, run_game, AiPlayer, CliPlayer, Difficulty, GameConfig,
    GameStatus, LossReveal, Player, Presenter, Seed, BOARD_COLS, BOARD_ROWS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DifficultyArg {
    Low,
    Medium,
    High,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Low => Difficulty::Low,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::High => Difficulty::High,
        }
    }
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, value_enum, default_value_t = DifficultyArg::Low)]
    difficulty: DifficultyArg,
    #[arg(long, help = "Fix the mine layout seed (default: seed zero)")]
    seed: Option<u64>,
    #[arg(long, conflicts_with = "seed", help = "Seed the mine layout from the clock")]
    time_seed: bool,
    #[arg(long, help = "Show every mine after a loss")]
    reveal_mines: bool,
    #[arg(long, default_value_t = BOARD_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = BOARD_COLS)]
    cols: usize,
}

impl GameArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        if self.cols > 26 {
            bail!("at most 26 columns can be addressed by letter");
        }
        let seed = match (self.seed, self.time_seed) {
            (Some(s), _) => Seed::Fixed(s),
            (None, true) => Seed::TimeOfDay,
            (None, false) => Seed::Zero,
        };
        let loss_reveal = if self.reveal_mines {
            LossReveal::AllMines
        } else {
            LossReveal::TriggeredOnly
        };
        Ok(GameConfig {
            rows: self.rows,
            cols: self.cols,
            difficulty: self.difficulty.into(),
            seed,
            loss_reveal,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Watch the computer play one game.
    Auto {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Seed for the computer's guesses")]
        player_seed: Option<u64>,
    },
}

fn play(config: &GameConfig, player: &mut dyn Player, rng: &mut SmallRng) -> anyhow::Result<()> {
    let mut presenter = Presenter::from_config(config).context("invalid game configuration")?;
    println!(
        "{}x{} board, {} difficulty, {} mines (seed {})",
        config.rows,
        config.cols,
        presenter.difficulty(),
        presenter.mine_count(),
        presenter.seed()
    );
    let report = run_game(&mut presenter, player, rng, print_player_view)?;
    match report.status {
        GameStatus::Won => println!("Won in {} moves.", report.moves),
        GameStatus::Lost => println!("Lost after {} moves.", report.moves),
        GameStatus::InProgress => println!("Game abandoned."),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game } => {
            let config = game.config()?;
            let mut rng = SmallRng::from_rng(&mut rand::rng());
            let mut player = CliPlayer::new();
            play(&config, &mut player, &mut rng)?;
        }
        Commands::Auto { game, player_seed } => {
            let config = game.config()?;
            let mut rng = if let Some(s) = player_seed {
                SmallRng::seed_from_u64(s)
            } else {
                SmallRng::from_rng(&mut rand::rng())
            };
            let mut player = AiPlayer::new();
            play(&config, &mut player, &mut rng)?;
            println!("The computer guessed {} times.", player.guesses());
        }
    }
    Ok(())
}
