//! Season comparison report.

use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt;

use crate::config::TeamConfigs;
use crate::error::{SimError, SimResult};
use crate::prob::{average, percentage};
use crate::side::Side;
use crate::simulation::Simulation;
use crate::team::SeasonTotals;

/// One side's season: raw totals and per-game rates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideReport {
    pub side: Side,
    pub totals: SeasonTotals,
    /// Games the totals span; always positive
    pub games: u64,
}

impl SideReport {
    /// Wins per game played
    pub fn win_rate(&self) -> f64 {
        average(self.totals.wins, self.games)
    }

    pub fn points_per_game(&self) -> f64 {
        average(self.totals.points, self.games)
    }

    pub fn field_goal_attempts_per_game(&self) -> f64 {
        average(self.totals.field_goal_attempts, self.games)
    }

    pub fn field_goals_made_per_game(&self) -> f64 {
        average(self.totals.field_goals_made, self.games)
    }

    pub fn three_point_attempts_per_game(&self) -> f64 {
        average(self.totals.three_point_attempts, self.games)
    }

    pub fn rebounds_per_game(&self) -> f64 {
        average(self.totals.rebounds, self.games)
    }

    /// Field goal percentage in `[0, 100]`, 0.0 without attempts
    pub fn field_goal_pct(&self) -> f64 {
        percentage(self.totals.field_goals_made, self.totals.field_goal_attempts)
    }

    pub fn three_point_pct(&self) -> f64 {
        percentage(self.totals.three_pointers_made, self.totals.three_point_attempts)
    }

    /// Normal approximation interval for the win rate at `confidence`
    /// (e.g. 0.95), clamped to `[0, 1]`.
    pub fn win_rate_interval(&self, confidence: f64) -> SimResult<(f64, f64)> {
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(SimError::InvalidProbability {
                field: "confidence".to_string(),
                value: confidence,
            });
        }
        let normal = Normal::new(0.0, 1.0).map_err(|e| SimError::Stats(e.to_string()))?;
        let z = normal.inverse_cdf(1.0 - (1.0 - confidence) / 2.0);

        let p = self.win_rate();
        let stderr = (p * (1.0 - p) / self.games as f64).sqrt();
        Ok(((p - z * stderr).max(0.0), (p + z * stderr).min(1.0)))
    }
}

/// Side-by-side comparison of a finished season.
#[derive(Clone, Debug, PartialEq)]
pub struct SeasonReport {
    pub games: u64,
    pub team_configs: TeamConfigs,
    sides: [SideReport; 2],
}

impl SeasonReport {
    /// Confidence level used for the win rate interval line
    pub const CONFIDENCE: f64 = 0.95;

    /// Snapshot the simulation's counters. Fails if no game has been played.
    pub fn from_simulation<S>(sim: &Simulation<S>) -> SimResult<Self> {
        let games = sim.games_played();
        if games == 0 {
            return Err(SimError::NoGamesPlayed);
        }
        let side_report = |side: Side| SideReport {
            side,
            totals: *sim.team(side).season(),
            games,
        };
        Ok(SeasonReport {
            games,
            team_configs: *sim.team_configs(),
            sides: [side_report(Side::A), side_report(Side::B)],
        })
    }

    pub fn side(&self, side: Side) -> &SideReport {
        &self.sides[side.index()]
    }

    /// Report body, one line per statistic
    pub fn lines(&self) -> SimResult<Vec<String>> {
        let [a, b] = &self.sides;
        let compare = |label: &str, stat: fn(&SideReport) -> f64| {
            format!("average {}: {:.2} : {:.2}", label, stat(a), stat(b))
        };

        let mut lines = vec![format!("=====Show statistics after {} games.=====", self.games)];
        for side in Side::ALL {
            lines.push(format!("{} setting", side));
            lines.extend(self.team_configs[side].to_string().lines().map(str::to_string));
        }
        lines.push(compare("win", SideReport::win_rate));
        lines.push(compare("pts", SideReport::points_per_game));
        lines.push(compare("fga", SideReport::field_goal_attempts_per_game));
        lines.push(compare("fgm", SideReport::field_goals_made_per_game));
        lines.push(format!(
            "average fg_pct: {:.2}% : {:.2}%",
            a.field_goal_pct(),
            b.field_goal_pct()
        ));
        lines.push(compare("3pa", SideReport::three_point_attempts_per_game));
        lines.push(compare("reb", SideReport::rebounds_per_game));

        let (a_lo, a_hi) = a.win_rate_interval(Self::CONFIDENCE)?;
        let (b_lo, b_hi) = b.win_rate_interval(Self::CONFIDENCE)?;
        lines.push(format!(
            "win rate {:.0}% interval: [{:.3}, {:.3}] : [{:.3}, {:.3}]",
            Self::CONFIDENCE * 100.0,
            a_lo,
            a_hi,
            b_lo,
            b_hi
        ));
        Ok(lines)
    }
}

impl fmt::Display for SeasonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.lines().map_err(|_| fmt::Error)?;
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;

    fn report_for(wins: u64, games: u64) -> SideReport {
        SideReport {
            side: Side::A,
            totals: SeasonTotals {
                wins,
                points: 820,
                field_goal_attempts: 100,
                field_goals_made: 41,
                three_point_attempts: 0,
                three_pointers_made: 0,
                rebounds: 30,
            },
            games,
        }
    }

    #[test]
    fn test_rates() {
        let report = report_for(6, 10);
        assert!((report.win_rate() - 0.6).abs() < 1e-12);
        assert!((report.points_per_game() - 82.0).abs() < 1e-12);
        assert!((report.field_goal_pct() - 41.0).abs() < 1e-12);
        assert_eq!(report.three_point_pct(), 0.0);
        assert!((report.rebounds_per_game() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_win_rate_interval() {
        let report = report_for(500, 1000);
        let (lo, hi) = report.win_rate_interval(0.95).unwrap();
        // 1.96 * sqrt(0.25 / 1000)
        assert!((hi - lo - 2.0 * 0.030990).abs() < 1e-4, "{} {}", lo, hi);
        assert!(lo < 0.5 && hi > 0.5);

        let (lo, hi) = report_for(10, 10).win_rate_interval(0.95).unwrap();
        assert_eq!((lo, hi), (1.0, 1.0));

        assert!(report.win_rate_interval(1.0).is_err());
        assert!(report.win_rate_interval(0.0).is_err());
    }

    #[test]
    fn test_no_games_is_an_error() {
        let sim = Simulation::seeded(SimulationConfig::default(), TeamConfigs::default(), 1);
        assert!(matches!(
            SeasonReport::from_simulation(&sim),
            Err(SimError::NoGamesPlayed)
        ));
    }

    #[test]
    fn test_report_layout() {
        let mut sim = Simulation::seeded(
            SimulationConfig::new(40, 5).unwrap(),
            TeamConfigs::default(),
            12,
        );
        sim.run_all();
        let report = SeasonReport::from_simulation(&sim).unwrap();
        let text = report.to_string();

        assert!(text.starts_with("=====Show statistics after 5 games.====="));
        assert!(text.contains("A setting"));
        assert!(text.contains("B setting"));
        for label in ["win", "pts", "fga", "fgm", "fg_pct", "3pa", "reb"] {
            assert!(text.contains(&format!("average {}:", label)), "missing {}", label);
        }
        assert!(text.contains("win rate 95% interval"));
        assert_eq!(report.side(Side::B).totals.three_point_attempts, 0);
    }
}
