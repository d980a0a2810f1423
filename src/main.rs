use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use othello_agent::ai::StrategyKind;
use othello_agent::client::GameClient;
use othello_agent::config::AppConfig;

/// Play Othello against a remote game server.
#[derive(Parser)]
#[command(name = "othello-agent", about = "Othello playing agent")]
struct Cli {
    /// Port the game server listens on
    #[arg(long)]
    port: Option<u16>,

    /// Host the game server runs on
    #[arg(long)]
    host: Option<String>,

    /// Strategy used to select moves
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// Seed for reproducible tie-breaking
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
    if let Some(port) = cli.port {
        config.client.port = port;
    }
    if let Some(host) = cli.host {
        config.client.host = host;
    }
    if let Some(strategy) = cli.strategy {
        config.client.strategy = strategy;
    }
    if let Some(seed) = cli.seed {
        config.client.seed = Some(seed);
    }
    config.validate()?;

    let rng = match config.client.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut client = GameClient::new(config.client.strategy.build(rng));
    client
        .play(&config.client.host, config.client.port)
        .with_context(|| {
            format!(
                "playing against {}:{}",
                config.client.host, config.client.port
            )
        })?;
    Ok(())
}
