use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::info;

use crate::config::{SimulationConfig, SimulationSetup, TeamConfigs};
use crate::game::{play_game, GameResult};
use crate::prob::{RandomSource, RngSource};
use crate::side::Side;
use crate::team::{SeasonTotals, Team};

/// A season between sides A and B.
///
/// Owns both teams, whose season counters accumulate across every game
/// played, and the random stream every trial draws from.
#[derive(Clone, Debug)]
pub struct Simulation<S = RngSource> {
    config: SimulationConfig,

    /// Kept for reporting
    team_configs: TeamConfigs,

    teams: [Team; 2],
    source: S,
    games_played: u64,
}

impl Simulation<RngSource> {
    /// Simulation on a reproducible ChaCha8 stream
    pub fn seeded(config: SimulationConfig, team_configs: TeamConfigs, seed: u64) -> Self {
        Simulation::new(config, team_configs, RngSource::seeded(seed))
    }

    /// Build from a loaded setup; unseeded setups draw from entropy.
    pub fn from_setup(setup: &SimulationSetup) -> Self {
        Simulation::new(
            setup.simulation,
            setup.teams,
            RngSource::from_seed_option(setup.seed),
        )
    }
}

impl<S: RandomSource> Simulation<S> {
    pub fn new(config: SimulationConfig, team_configs: TeamConfigs, source: S) -> Self {
        Simulation {
            config,
            team_configs,
            teams: [
                Team::new(Side::A, team_configs.a),
                Team::new(Side::B, team_configs.b),
            ],
            source,
            games_played: 0,
        }
    }

    /// Play `games_to_play` games, one after another.
    pub fn run_all(&mut self) {
        let games = self.config.games_to_play();
        info!(
            "Simulating {} games of {} possessions",
            games,
            self.config.possessions_per_game()
        );
        for _ in 0..games {
            self.run_one_game();
        }
        info!(
            "Season done: wins A={} B={}",
            self.team(Side::A).season().wins,
            self.team(Side::B).season().wins
        );
    }

    pub fn run_one_game(&mut self) -> GameResult {
        let result = play_game(
            &mut self.teams,
            self.config.possessions_per_game(),
            &mut self.source,
        );
        self.games_played += 1;
        result
    }

    /// Play `games_to_play` games across the rayon pool.
    ///
    /// Each game gets fresh team counters and its own ChaCha8 stream, seeded
    /// from a master stream built from `seed`. Per-game totals are folded into
    /// the season counters only after every game has finished, so the result
    /// depends on `seed` alone and not on the number of workers. Does not draw
    /// from this simulation's own source.
    pub fn run_all_parallel(&mut self, seed: u64) {
        let games = self.config.games_to_play();
        let possessions = self.config.possessions_per_game();
        let configs = self.team_configs;
        info!(
            "Simulating {} games of {} possessions on {} threads",
            games,
            possessions,
            rayon::current_num_threads()
        );

        let mut master = ChaCha8Rng::seed_from_u64(seed);
        let seeds: Vec<u64> = (0..games).map(|_| master.gen::<u64>()).collect();

        let per_game: Vec<[SeasonTotals; 2]> = seeds
            .par_iter()
            .map(|&game_seed| {
                let mut teams = [Team::new(Side::A, configs.a), Team::new(Side::B, configs.b)];
                let mut source = RngSource::seeded(game_seed);
                play_game(&mut teams, possessions, &mut source);
                [*teams[0].season(), *teams[1].season()]
            })
            .collect();

        for totals in per_game {
            for side in Side::ALL {
                self.teams[side.index()].absorb(totals[side.index()]);
            }
        }
        self.games_played += u64::from(games);
        info!(
            "Season done: wins A={} B={}",
            self.team(Side::A).season().wins,
            self.team(Side::B).season().wins
        );
    }
}

impl<S> Simulation<S> {
    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn team_configs(&self) -> &TeamConfigs {
        &self.team_configs
    }

    /// Games played so far, across every run
    pub fn games_played(&self) -> u64 {
        self.games_played
    }
}
