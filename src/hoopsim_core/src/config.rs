//! Validated configuration records and the YAML loader.
//!
//! Every probability is checked when the record is built, whether through a
//! constructor or through deserialization, so the engine never samples an
//! out-of-range value.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Index;
use std::path::Path;

use crate::constants::{
    DEFAULT_FREE_THROW_PCT, DEFAULT_OFFENSIVE_REBOUND_PCT, DEFAULT_THREE_POINT_PCT,
    DEFAULT_TWO_POINT_PCT, GAMES_TO_PLAY, POSSESSIONS_PER_GAME, THREE_POINT_HEAVY_SELECTION,
    TWO_POINT_HEAVY_SELECTION,
};
use crate::error::{SimError, SimResult};
use crate::side::{ShotType, Side};

/// A value in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    pub const ZERO: Probability = Probability(0.0);
    pub const ONE: Probability = Probability(1.0);

    pub fn new(value: f64) -> SimResult<Self> {
        Probability::for_field("probability", value)
    }

    /// Like [`Probability::new`], naming `field` in the error
    pub fn for_field(field: &str, value: f64) -> SimResult<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Probability(value))
        } else {
            Err(SimError::InvalidProbability {
                field: field.to_string(),
                value,
            })
        }
    }

    /// Only for values known at compile time to be in range.
    const fn from_const(value: f64) -> Self {
        Probability(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Probability {
    type Error = SimError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Probability::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> f64 {
        p.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Make probability per shot type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShotPct {
    /// Inert: no foul or free throw mechanic samples it.
    #[serde(alias = "ft")]
    pub free_throw: Probability,
    #[serde(alias = "two_pts")]
    pub two_point: Probability,
    #[serde(alias = "three_pts")]
    pub three_point: Probability,
}

impl ShotPct {
    pub fn new(free_throw: f64, two_point: f64, three_point: f64) -> SimResult<Self> {
        Ok(ShotPct {
            free_throw: Probability::for_field("free_throw", free_throw)?,
            two_point: Probability::for_field("two_point", two_point)?,
            three_point: Probability::for_field("three_point", three_point)?,
        })
    }

    pub fn make_pct(&self, shot: ShotType) -> Probability {
        match shot {
            ShotType::TwoPoint => self.two_point,
            ShotType::ThreePoint => self.three_point,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ability {
    pub shot_pct: ShotPct,
    #[serde(alias = "offensive_reb_pct")]
    pub offensive_rebound_pct: Probability,
}

impl Ability {
    pub fn new(shot_pct: ShotPct, offensive_rebound_pct: f64) -> SimResult<Self> {
        Ok(Ability {
            shot_pct,
            offensive_rebound_pct: Probability::for_field(
                "offensive_rebound_pct",
                offensive_rebound_pct,
            )?,
        })
    }
}

/// How a team picks its next shot.
///
/// Only `two_point_weight` is sampled: it is the probability that the next
/// attempt is a two, and a failed trial means a three. `three_point_weight`
/// is kept for configuration compatibility and is not required to
/// complement it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShotSelection {
    #[serde(alias = "two_point", alias = "two_pts")]
    pub two_point_weight: Probability,
    #[serde(alias = "three_point", alias = "three_pts")]
    pub three_point_weight: Probability,
}

impl ShotSelection {
    pub fn new(two_point_weight: f64, three_point_weight: f64) -> SimResult<Self> {
        Ok(ShotSelection {
            two_point_weight: Probability::for_field("two_point_weight", two_point_weight)?,
            three_point_weight: Probability::for_field("three_point_weight", three_point_weight)?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Strategy {
    pub shot_selection: ShotSelection,
}

/// Fixed ability and strategy for one side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamConfig {
    pub ability: Ability,
    pub strategy: Strategy,
}

impl TeamConfig {
    pub fn new(ability: Ability, strategy: Strategy) -> Self {
        TeamConfig { ability, strategy }
    }

    /// Default shooting with the given `(two_point, three_point)` selection weights
    const fn default_ability_with(selection: (f64, f64)) -> Self {
        TeamConfig {
            ability: Ability {
                shot_pct: ShotPct {
                    free_throw: Probability::from_const(DEFAULT_FREE_THROW_PCT),
                    two_point: Probability::from_const(DEFAULT_TWO_POINT_PCT),
                    three_point: Probability::from_const(DEFAULT_THREE_POINT_PCT),
                },
                offensive_rebound_pct: Probability::from_const(DEFAULT_OFFENSIVE_REBOUND_PCT),
            },
            strategy: Strategy {
                shot_selection: ShotSelection {
                    two_point_weight: Probability::from_const(selection.0),
                    three_point_weight: Probability::from_const(selection.1),
                },
            },
        }
    }

    /// Default team A: only shoots threes
    pub const fn three_point_heavy() -> Self {
        TeamConfig::default_ability_with(THREE_POINT_HEAVY_SELECTION)
    }

    /// Default team B: never shoots threes
    pub const fn two_point_heavy() -> Self {
        TeamConfig::default_ability_with(TWO_POINT_HEAVY_SELECTION)
    }
}

impl fmt::Display for TeamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = &self.ability.shot_pct;
        let sel = &self.strategy.shot_selection;
        writeln!(
            f,
            "ability: shot_pct(free_throw={}, two_point={}, three_point={}), offensive_rebound_pct={}",
            pct.free_throw, pct.two_point, pct.three_point, self.ability.offensive_rebound_pct
        )?;
        write!(
            f,
            "strategy: shot_selection(two_point_weight={}, three_point_weight={})",
            sel.two_point_weight, sel.three_point_weight
        )
    }
}

/// One config per side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamConfigs {
    #[serde(rename = "A")]
    pub a: TeamConfig,
    #[serde(rename = "B")]
    pub b: TeamConfig,
}

impl TeamConfigs {
    pub fn new(a: TeamConfig, b: TeamConfig) -> Self {
        TeamConfigs { a, b }
    }

    pub fn get(&self, side: Side) -> &TeamConfig {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

impl Index<Side> for TeamConfigs {
    type Output = TeamConfig;

    fn index(&self, side: Side) -> &TeamConfig {
        self.get(side)
    }
}

impl Default for TeamConfigs {
    fn default() -> Self {
        TeamConfigs {
            a: TeamConfig::three_point_heavy(),
            b: TeamConfig::two_point_heavy(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSimulationConfig {
    possessions_per_game: u32,
    #[serde(alias = "play_games")]
    games_to_play: u32,
}

/// Length of a game and of a season.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    possessions_per_game: u32,
    games_to_play: u32,
}

impl SimulationConfig {
    pub fn new(possessions_per_game: u32, games_to_play: u32) -> SimResult<Self> {
        if possessions_per_game == 0 {
            return Err(SimError::InvalidCount {
                field: "possessions_per_game".to_string(),
            });
        }
        if games_to_play == 0 {
            return Err(SimError::InvalidCount {
                field: "games_to_play".to_string(),
            });
        }
        Ok(SimulationConfig {
            possessions_per_game,
            games_to_play,
        })
    }

    pub fn possessions_per_game(&self) -> u32 {
        self.possessions_per_game
    }

    pub fn games_to_play(&self) -> u32 {
        self.games_to_play
    }
}

impl<'de> Deserialize<'de> for SimulationConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSimulationConfig::deserialize(deserializer)?;
        SimulationConfig::new(raw.possessions_per_game, raw.games_to_play)
            .map_err(serde::de::Error::custom)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            possessions_per_game: POSSESSIONS_PER_GAME,
            games_to_play: GAMES_TO_PLAY,
        }
    }
}

/// Everything needed to build a [`crate::Simulation`], as read from YAML.
///
/// Missing sections fall back to the defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSetup {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub teams: TeamConfigs,
    /// Seed for the random stream; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimulationSetup {
    /// Load a setup from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a setup from a YAML string.
    pub fn from_yaml(yaml: &str) -> SimResult<Self> {
        let setup: SimulationSetup = serde_yaml::from_str(yaml)?;
        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const THREE_VS_TWO: &str = include_str!("../configs/three_vs_two.yaml");

    #[test]
    fn test_probability_bounds() {
        assert!(Probability::new(0.0).is_ok());
        assert!(Probability::new(1.0).is_ok());
        assert!(Probability::new(1.01).is_err());
        assert!(Probability::new(-0.01).is_err());
        assert!(Probability::new(f64::NAN).is_err());
    }

    #[test]
    fn test_constructor_names_bad_field() {
        let err = ShotPct::new(1.0, 0.4, 2.7).unwrap_err();
        match err {
            SimError::InvalidProbability { field, value } => {
                assert_eq!(field, "three_point");
                assert_eq!(value, 2.7);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_simulation_config_rejects_zero() {
        assert!(SimulationConfig::new(0, 10).is_err());
        assert!(SimulationConfig::new(10, 0).is_err());
        let config = SimulationConfig::new(1, 1).unwrap();
        assert_eq!(config.possessions_per_game(), 1);
        assert_eq!(config.games_to_play(), 1);
    }

    #[test]
    fn test_make_pct_by_shot_type() {
        let pct = ShotPct::new(0.7, 0.5, 0.3).unwrap();
        assert_eq!(pct.make_pct(ShotType::TwoPoint).value(), 0.5);
        assert_eq!(pct.make_pct(ShotType::ThreePoint).value(), 0.3);
    }

    #[test]
    fn test_bundled_yaml_matches_defaults() {
        let setup = SimulationSetup::from_yaml(THREE_VS_TWO).unwrap();
        assert_eq!(setup.simulation, SimulationConfig::default());
        assert_eq!(setup.teams, TeamConfigs::default());
        assert_eq!(setup.seed, None);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let setup = SimulationSetup::from_yaml("seed: 9\n").unwrap();
        assert_eq!(setup.seed, Some(9));
        assert_eq!(setup.teams, TeamConfigs::default());
        assert_eq!(setup.simulation.games_to_play(), GAMES_TO_PLAY);
    }

    #[test]
    fn test_yaml_rejects_out_of_range_probability() {
        let yaml = THREE_VS_TWO.replace("three_point: 0.27", "three_point: 1.27");
        let err = SimulationSetup::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("outside [0, 1]"), "{}", err);
    }

    #[test]
    fn test_yaml_rejects_zero_games() {
        let yaml = THREE_VS_TWO.replace("games_to_play: 1000", "games_to_play: 0");
        assert!(SimulationSetup::from_yaml(&yaml).is_err());
    }

    #[test]
    fn test_yaml_rejects_unknown_side() {
        let yaml = THREE_VS_TWO.replace("  B:\n", "  C:\n");
        assert!(matches!(
            SimulationSetup::from_yaml(&yaml),
            Err(SimError::Yaml(_))
        ));
    }

    #[test]
    fn test_yaml_accepts_short_field_names() {
        let yaml = r#"
simulation: { possessions_per_game: 10, play_games: 3 }
teams:
  A:
    ability:
      shot_pct: { ft: 0.8, two_pts: 0.5, three_pts: 0.35 }
      offensive_reb_pct: 0.3
    strategy:
      shot_selection: { two_pts: 0.6, three_pts: 0.4 }
  B:
    ability:
      shot_pct: { ft: 0.8, two_pts: 0.5, three_pts: 0.35 }
      offensive_reb_pct: 0.3
    strategy:
      shot_selection: { two_pts: 0.6, three_pts: 0.4 }
"#;
        let setup = SimulationSetup::from_yaml(yaml).unwrap();
        assert_eq!(setup.simulation.games_to_play(), 3);
        assert_eq!(setup.teams[Side::B].ability.shot_pct.three_point.value(), 0.35);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(THREE_VS_TWO.as_bytes()).unwrap();
        let setup = SimulationSetup::load(file.path()).unwrap();
        assert_eq!(setup.teams.a, TeamConfig::three_point_heavy());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            SimulationSetup::load("/nonexistent/hoopsim.yaml"),
            Err(SimError::Io(_))
        ));
    }

    #[test]
    fn test_team_config_display() {
        let text = TeamConfig::three_point_heavy().to_string();
        assert!(text.contains("three_point=0.270"));
        assert!(text.contains("two_point_weight=0.000"));
    }
}
