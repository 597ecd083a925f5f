//! ai-sim - run an arena scenario headless.

use std::path::PathBuf;

use ai_grid::GridWorldView;
use ai_sim::{SimConfig, Simulation};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ai-sim")]
#[command(about = "Run a turn-based arena of FSM and behavior-tree agents", version)]
struct Cli {
    /// Scenario file (YAML); the builtin arena is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the scenario's turn count
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override the scenario's random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    if cli.json {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).with_target(false).init();
    }

    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::builtin()?,
    };
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let mut sim = Simulation::from_config(&config)?;
    let mut hits = 0usize;
    for _ in 0..config.ticks {
        let report = sim.step();
        hits += report.hits.len();
        if sim.living_agents().len() <= 1 {
            break;
        }
    }

    println!("Ran {} turns, {} melee hits", sim.tick(), hits);
    println!();
    for id in sim.living_agents() {
        let name = sim.name(id).unwrap_or("?");
        let pos = sim.world.position(id).unwrap_or_default();
        let hp = sim.world.hitpoints(id).unwrap_or(0.0);
        println!("  {name:<14} ({:>3}, {:>3})  hp {hp:>5.1}", pos.x, pos.y);
    }

    Ok(())
}
