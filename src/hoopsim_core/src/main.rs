//! Hoopsim - compare shot-selection strategies over a simulated season.
//!
//! Runs with the default three-point vs two-point matchup when given no
//! arguments. Set `RUST_LOG=hoopsim_core=debug` to trace every possession.

use clap::Parser;
use hoopsim_core::{SeasonReport, SimResult, Simulation, SimulationConfig, SimulationSetup};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "hoopsim")]
#[command(about = "Simulate a basketball season between two shot-selection strategies")]
struct Cli {
    /// YAML setup file (simulation, teams, seed)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of games
    #[arg(long)]
    games: Option<u32>,

    /// Override the possessions per game
    #[arg(long)]
    possessions: Option<u32>,

    /// Seed for the random stream (overrides the setup file)
    #[arg(long)]
    seed: Option<u64>,

    /// Play games on all cores; requires a seed, defaults to 0 without one
    #[arg(long)]
    parallel: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn run(cli: Cli) -> SimResult<()> {
    let mut setup = match &cli.config {
        Some(path) => {
            info!("Loading setup from: {}", path.display());
            SimulationSetup::load(path)?
        }
        None => SimulationSetup::default(),
    };

    if cli.games.is_some() || cli.possessions.is_some() {
        setup.simulation = SimulationConfig::new(
            cli.possessions
                .unwrap_or(setup.simulation.possessions_per_game()),
            cli.games.unwrap_or(setup.simulation.games_to_play()),
        )?;
    }
    if cli.seed.is_some() {
        setup.seed = cli.seed;
    }

    let mut simulation = Simulation::from_setup(&setup);
    if cli.parallel {
        simulation.run_all_parallel(setup.seed.unwrap_or(0));
    } else {
        simulation.run_all();
    }

    let report = SeasonReport::from_simulation(&simulation)?;
    for line in report.lines()? {
        info!("{}", line);
    }
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()) {
        error!("Simulation failed: {}", e);
        std::process::exit(1);
    }
}
