#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a headless Game Bee session.
//!
//! The player bee follows a scripted pointer while the helper bees pollinate
//! on their own. Set `RUST_LOG=debug` to follow expiries and contaminations.

mod config;
mod pointer;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_bee_core::FieldConfig;
use game_bee_rendering::Scene;
use game_bee_simulation::Simulation;
use game_bee_world::query;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

use self::{pointer::Lissajous, summary::Summary};

const DEFAULT_SEED: u64 = 0x6761_6d65_6265_6521;

#[derive(Debug, Parser)]
#[command(name = "game-bee")]
#[command(about = "Run a headless Game Bee session with a scripted pointer")]
struct Args {
    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u32,
    /// Seed for flower spawning.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// TOML file overriding field constants.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
}

/// Entry point for the Game Bee command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let field = match &args.config {
        Some(path) => config::load(path)?,
        None => FieldConfig::default(),
    };

    let mut simulation =
        Simulation::with_config(field, args.seed).context("invalid field configuration")?;
    let path = Lissajous::spanning(query::field_config(simulation.world()));
    info!(ticks = args.ticks, seed = args.seed, "session started");

    for tick in 0..args.ticks {
        let _ = simulation.step(Some(path.at(tick)));
    }

    let world = simulation.world();
    let scene = Scene::compose(
        &query::bee_view(world),
        &query::flower_view(world),
        query::field_config(world),
    );
    let summary = Summary::collect(&simulation, &scene);
    info!(
        deliveries = summary.stats.deliveries,
        live_flowers = summary.live_flowers,
        "session finished"
    );

    if args.json {
        let json =
            serde_json::to_string_pretty(&summary).context("failed to serialize session summary")?;
        println!("{json}");
    } else {
        println!("{}", query::welcome_banner(world));
        summary.print();
    }

    Ok(())
}
