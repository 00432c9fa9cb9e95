//! Headless autoplay driver.
//!
//! Plays a session by always taking the first productive swap, then prints
//! the final board and score. Useful for checking configurations and
//! eyeballing cascades without a front end.
//!
//! ```text
//! match3-autoplay --seed 7 --size 8
//! RUST_LOG=debug match3-autoplay --config board.json --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use rust_match3::{EngineConfig, GameOutcome, Grid, Session};

#[derive(Parser, Debug)]
#[command(name = "match3-autoplay", about = "Play a match-3 session headlessly")]
struct Cli {
    /// JSON configuration file; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the grid size
    #[arg(long)]
    size: Option<usize>,

    /// Override the move budget
    #[arg(long)]
    moves: Option<u32>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    seed: u64,
    score: u32,
    moves_made: u32,
    outcome: GameOutcome,
    stuck: bool,
    grid: &'a Grid,
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            EngineConfig::from_json_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(size) = cli.size {
        config = config.with_grid_size(size);
    }
    if let Some(moves) = cli.moves {
        config = config.with_max_moves(moves);
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let seed = config.seed;
    let mut session = Session::new(config).context("starting session")?;

    let mut stuck = false;
    while !session.outcome().is_over() {
        let Some(swap) = session.hint() else {
            stuck = true;
            info!("No productive swap left after {} moves", session.moves_made());
            break;
        };
        session.play(swap).with_context(|| format!("playing {}", swap))?;
    }

    if cli.json {
        let report = Report {
            seed,
            score: session.score(),
            moves_made: session.moves_made(),
            outcome: session.outcome(),
            stuck,
            grid: session.grid(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", session.grid());
        println!();
        println!(
            "score {} / {}, moves {}, {}{}",
            session.score(),
            session.config().target_score,
            session.moves_made(),
            session.outcome(),
            if stuck { " (no moves left)" } else { "" }
        );
    }

    Ok(())
}
