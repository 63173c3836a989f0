//! Headless agent-vs-agent games.
//!
//! ```text
//! gomoku-selfplay --black hard --white easy --seed 7
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::{Agent, Board, Difficulty, GameConfig, Stone};

/// Play one game between two agents and print the final position.
#[derive(Parser)]
#[command(name = "gomoku-selfplay", about = "Play the Gomoku AI against itself")]
struct Cli {
    /// Difficulty of the Black agent: easy, medium or hard
    #[arg(long, default_value = "medium")]
    black: Difficulty,

    /// Difficulty of the White agent: easy, medium or hard
    #[arg(long, default_value = "medium")]
    white: Difficulty,

    /// RNG seed; overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Board side length; overrides the config file
    #[arg(long)]
    size: Option<usize>,

    /// Stop after this many moves and call it a draw
    #[arg(long)]
    max_moves: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let black = Agent::new(Stone::Black, cli.black);
    let white = Agent::new(Stone::White, cli.white);
    let mut board = Board::with_size(config.board_size);
    let max_moves = cli
        .max_moves
        .unwrap_or(config.board_size * config.board_size);

    info!(black = %cli.black, white = %cli.white, size = config.board_size, "starting game");

    while !board.is_finished() && board.stone_count() < max_moves {
        let agent = match board.current_player() {
            Stone::Black => &black,
            _ => &white,
        };
        let result = agent.analyze_with_rng(&board, &mut rng);
        let Some(pos) = result.best_move else {
            break;
        };
        board.place_stone(pos)?;
        info!(
            player = agent.player().name(),
            row = pos.row,
            col = pos.col,
            step = ?result.search_type,
            "move {}",
            board.stone_count()
        );
    }

    print!("{board}");
    match board.winner() {
        Some(winner) => {
            let tier = if winner == Stone::Black { cli.black } else { cli.white };
            println!("{} ({tier}) wins after {} moves", winner.name(), board.stone_count());
        }
        None if board.stone_count() == 0 => bail!("no move was played"),
        None => println!("draw after {} moves", board.stone_count()),
    }
    Ok(())
}
