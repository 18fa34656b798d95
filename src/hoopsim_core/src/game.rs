use tracing::debug;

use crate::constants::JUMP_BALL_PCT;
use crate::possession::{offense_and_defense, resolve_possession};
use crate::prob::{bernoulli_trial, RandomSource};
use crate::side::Side;
use crate::team::Team;

/// Final score of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub points_a: u32,
    pub points_b: u32,
    /// `None` on a tie; ties are not broken
    pub winner: Option<Side>,
}

impl GameResult {
    pub fn new(points_a: u32, points_b: u32) -> Self {
        GameResult {
            points_a,
            points_b,
            winner: GameResult::winner_of(points_a, points_b),
        }
    }

    /// Strictly more points wins
    pub fn winner_of(points_a: u32, points_b: u32) -> Option<Side> {
        if points_a > points_b {
            Some(Side::A)
        } else if points_b > points_a {
            Some(Side::B)
        } else {
            None
        }
    }

    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::A => self.points_a,
            Side::B => self.points_b,
        }
    }
}

/// Coin flip for the opening possession
pub fn jump_ball<S: RandomSource + ?Sized>(source: &mut S) -> Side {
    if bernoulli_trial(source, JUMP_BALL_PCT) {
        Side::A
    } else {
        Side::B
    }
}

/// Play one full game on `teams` (indexed by [`Side::index`]).
///
/// Resets game scores, flips for the opening possession, plays exactly
/// `possessions` possessions and records a win for a strict winner.
pub fn play_game<S: RandomSource + ?Sized>(
    teams: &mut [Team; 2],
    possessions: u32,
    source: &mut S,
) -> GameResult {
    for team in teams.iter_mut() {
        team.start_new_game();
    }

    let mut side = jump_ball(source);
    debug!("Jump ball result: offensive team is {}", side);

    for _ in 0..possessions {
        let (offense, defense) = offense_and_defense(teams, side);
        side = resolve_possession(offense, defense, source);
    }

    let result = GameResult::new(
        teams[Side::A.index()].game_points(),
        teams[Side::B.index()].game_points(),
    );
    if let Some(winner) = result.winner {
        teams[winner.index()].record_win();
    }
    debug!(
        "{}:{}, winner: {}",
        result.points_a,
        result.points_b,
        result.winner.map_or("Draw", Side::label)
    );
    result
}
