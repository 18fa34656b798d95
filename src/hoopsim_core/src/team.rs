use std::ops::AddAssign;
use tracing::debug;

use crate::config::TeamConfig;
use crate::prob::{bernoulli_trial, RandomSource};
use crate::side::{ShotType, Side};

/// Cumulative counters across a season.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeasonTotals {
    pub wins: u64,
    pub points: u64,
    pub field_goal_attempts: u64,
    pub field_goals_made: u64,
    pub three_point_attempts: u64,
    pub three_pointers_made: u64,
    pub rebounds: u64,
}

impl SeasonTotals {
    pub fn two_point_attempts(&self) -> u64 {
        self.field_goal_attempts - self.three_point_attempts
    }

    pub fn two_pointers_made(&self) -> u64 {
        self.field_goals_made - self.three_pointers_made
    }
}

impl AddAssign for SeasonTotals {
    fn add_assign(&mut self, other: SeasonTotals) {
        self.wins += other.wins;
        self.points += other.points;
        self.field_goal_attempts += other.field_goal_attempts;
        self.field_goals_made += other.field_goals_made;
        self.three_point_attempts += other.three_point_attempts;
        self.three_pointers_made += other.three_pointers_made;
        self.rebounds += other.rebounds;
    }
}

/// A side's fixed configuration plus its running counters.
#[derive(Clone, Debug)]
pub struct Team {
    side: Side,
    config: TeamConfig,

    /// Points in the game being played
    game_points: u32,

    season: SeasonTotals,
}

impl Team {
    pub fn new(side: Side, config: TeamConfig) -> Self {
        Team {
            side,
            config,
            game_points: 0,
            season: SeasonTotals::default(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn config(&self) -> &TeamConfig {
        &self.config
    }

    pub fn game_points(&self) -> u32 {
        self.game_points
    }

    pub fn season(&self) -> &SeasonTotals {
        &self.season
    }

    /// Take one field goal attempt. Returns whether it went in.
    ///
    /// Draws twice: shot type (a two with probability `two_point_weight`,
    /// otherwise a three), then make/miss at that type's percentage.
    pub fn attempt_shot<S: RandomSource + ?Sized>(&mut self, source: &mut S) -> bool {
        self.season.field_goal_attempts += 1;

        let two_point_weight = self.config.strategy.shot_selection.two_point_weight;
        let shot = if bernoulli_trial(source, two_point_weight.value()) {
            ShotType::TwoPoint
        } else {
            ShotType::ThreePoint
        };
        if shot == ShotType::ThreePoint {
            self.season.three_point_attempts += 1;
        }

        let made = bernoulli_trial(source, self.config.ability.shot_pct.make_pct(shot).value());
        if made {
            if shot == ShotType::ThreePoint {
                self.season.three_pointers_made += 1;
            }
            self.score(shot.points());
        } else {
            debug!("{} missed a {}", self.side, shot);
        }
        made
    }

    /// Credit a made field goal worth `points`.
    pub fn score(&mut self, points: u32) {
        debug!("{} scores +{}", self.side, points);
        self.game_points += points;
        self.season.points += u64::from(points);
        self.season.field_goals_made += 1;
    }

    /// Contest the rebound after this team's miss. One draw; the winner
    /// is credited the rebound. Returns true if the offense kept the ball.
    pub fn contest_offensive_rebound<S: RandomSource + ?Sized>(
        &mut self,
        defense: &mut Team,
        source: &mut S,
    ) -> bool {
        let retained = bernoulli_trial(source, self.config.ability.offensive_rebound_pct.value());
        if retained {
            self.grab_rebound();
        } else {
            defense.grab_rebound();
        }
        retained
    }

    fn grab_rebound(&mut self) {
        debug!("{} rebound +1", self.side);
        self.season.rebounds += 1;
    }

    /// Reset the game score; season counters are untouched.
    pub fn start_new_game(&mut self) {
        self.game_points = 0;
    }

    pub fn record_win(&mut self) {
        self.season.wins += 1;
    }

    /// Fold in counters accumulated elsewhere, e.g. by a game played on a
    /// worker thread.
    pub fn absorb(&mut self, totals: SeasonTotals) {
        self.season += totals;
    }
}
