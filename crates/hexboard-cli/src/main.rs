//! Hexboard command line generator.
//!
//! Generates one board and prints a summary followed by the JSON snapshot.
//!
//! Environment:
//! - `HEXBOARD_CONFIG`: path to a JSON [`BoardConfig`], standard board if unset
//! - `HEXBOARD_SEED`: RNG seed for a reproducible board
//! - `RUST_LOG`: log filter, `info` if unset

use anyhow::Context;
use hexboard_core::{BoardConfig, BoardGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod report;

fn load_config() -> anyhow::Result<BoardConfig> {
    match std::env::var("HEXBOARD_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path))?;
            let config = BoardConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path))?;
            info!("Loaded config from {}", path);
            Ok(config)
        }
        Err(_) => Ok(BoardConfig::default()),
    }
}

fn load_seed() -> anyhow::Result<Option<u64>> {
    std::env::var("HEXBOARD_SEED")
        .ok()
        .map(|seed| seed.parse().context("HEXBOARD_SEED must be an unsigned integer"))
        .transpose()
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let generator = BoardGenerator::new(load_config()?);
    let board = match load_seed()? {
        Some(seed) => {
            info!("Using seed {}", seed);
            generator.generate(&mut StdRng::seed_from_u64(seed))?
        }
        None => generator.generate_random()?,
    };

    println!("{}", report::Summary(&board));
    println!(
        "{}",
        serde_json::to_string(&board.data.export_snapshot(0))?
    );
    Ok(())
}
