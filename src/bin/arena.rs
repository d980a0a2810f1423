use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use othello_agent::ai::StrategyKind;
use othello_agent::arena::{render_bar, terminal_width, Arena};
use othello_agent::config::AppConfig;

/// Benchmark strategies against the reference server's random player.
#[derive(Parser)]
#[command(name = "arena", about = "Benchmark Othello strategies against the reference server")]
struct Cli {
    /// Number of games per strategy
    #[arg(long)]
    games: Option<u32>,

    /// Benchmark a single strategy instead of all automated ones
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// Path to the reference server jar
    #[arg(long)]
    jar: Option<PathBuf>,

    /// Seed for reproducible side assignment and tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // apply CLI overrides
    if let Some(games) = cli.games {
        config.arena.num_games = games;
    }
    if let Some(jar) = cli.jar {
        config.arena.jar_path = jar;
    }
    config.validate()?;

    if cli.strategy == Some(StrategyKind::Human) {
        bail!("the arena only runs automated strategies");
    }
    let strategies = match cli.strategy {
        Some(kind) => vec![kind],
        None => vec![
            StrategyKind::Random,
            StrategyKind::Greedy,
            StrategyKind::MaxStable,
        ],
    };

    for kind in strategies {
        println!("{}", format!("{kind:?}").bold());
        let rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut arena = Arena::new(config.arena.clone(), kind, rng);
        let tally = arena
            .run()
            .with_context(|| format!("running {kind:?} games"))?;
        print!("{}", render_bar(&tally, terminal_width()));
    }
    Ok(())
}
