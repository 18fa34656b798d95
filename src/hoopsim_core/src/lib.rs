//! Hoopsim Core - possession-by-possession basketball simulation.
//!
//! Plays seasons of games between two teams with identical shooting and
//! rebounding abilities but different shot selection, so the effect of a
//! three-point-heavy or two-point-heavy strategy can be compared. Optional
//! Python bindings are available with the `python` feature.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod possession;
pub mod prob;
pub mod report;
pub mod side;
pub mod simulation;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use config::{
    Ability, Probability, ShotPct, ShotSelection, SimulationConfig, SimulationSetup, Strategy,
    TeamConfig, TeamConfigs,
};
pub use constants::{GAMES_TO_PLAY, POSSESSIONS_PER_GAME};
pub use error::{SimError, SimResult};
pub use game::{play_game, GameResult};
pub use possession::resolve_possession;
pub use prob::{average, bernoulli_trial, percentage, RandomSource, RngSource, ScriptedSource};
pub use report::{SeasonReport, SideReport};
pub use side::{ShotType, Side};
pub use simulation::Simulation;
pub use team::{SeasonTotals, Team};
