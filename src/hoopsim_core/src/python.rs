use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::config::{SimulationConfig, SimulationSetup, TeamConfigs};
use crate::constants::{GAMES_TO_PLAY, POSSESSIONS_PER_GAME};
use crate::error::SimError;
use crate::report::SeasonReport;
use crate::side::Side;
use crate::simulation::Simulation;

impl From<SimError> for PyErr {
    fn from(err: SimError) -> PyErr {
        match err {
            SimError::Io(e) => PyIOError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Season simulation with the default three-point vs two-point teams,
/// or any setup loaded from YAML.
#[pyclass(name = "Simulation")]
pub struct PySimulation {
    inner: Simulation,
}

#[pymethods]
impl PySimulation {
    #[new]
    #[pyo3(signature = (possessions_per_game = POSSESSIONS_PER_GAME, games_to_play = GAMES_TO_PLAY, seed = None))]
    fn new(possessions_per_game: u32, games_to_play: u32, seed: Option<u64>) -> PyResult<Self> {
        let setup = SimulationSetup {
            simulation: SimulationConfig::new(possessions_per_game, games_to_play)?,
            teams: TeamConfigs::default(),
            seed,
        };
        Ok(PySimulation {
            inner: Simulation::from_setup(&setup),
        })
    }

    /// Build a simulation from a YAML setup file.
    #[staticmethod]
    fn from_yaml(path: &str) -> PyResult<Self> {
        let setup = SimulationSetup::load(path)?;
        Ok(PySimulation {
            inner: Simulation::from_setup(&setup),
        })
    }

    fn run_all(&mut self, py: Python<'_>) {
        py.allow_threads(|| self.inner.run_all());
    }

    fn run_all_parallel(&mut self, py: Python<'_>, seed: u64) {
        py.allow_threads(|| self.inner.run_all_parallel(seed));
    }

    #[getter]
    fn games_played(&self) -> u64 {
        self.inner.games_played()
    }

    /// Season counters for side "A" or "B".
    fn totals(&self, side: &str) -> PyResult<HashMap<&'static str, u64>> {
        let side: Side = side.parse()?;
        let t = self.inner.team(side).season();
        Ok(HashMap::from([
            ("wins", t.wins),
            ("points", t.points),
            ("field_goal_attempts", t.field_goal_attempts),
            ("field_goals_made", t.field_goals_made),
            ("three_point_attempts", t.three_point_attempts),
            ("three_pointers_made", t.three_pointers_made),
            ("rebounds", t.rebounds),
        ]))
    }

    /// Comparison report text.
    fn report(&self) -> PyResult<String> {
        let lines = SeasonReport::from_simulation(&self.inner)?.lines()?;
        Ok(lines.join("\n"))
    }

    fn __repr__(&self) -> String {
        format!(
            "Simulation({} possessions/game, {} games, {} played)",
            self.inner.config().possessions_per_game(),
            self.inner.config().games_to_play(),
            self.inner.games_played()
        )
    }
}

/// Python module definition
#[pymodule]
fn hoopsim_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySimulation>()?;

    m.add("POSSESSIONS_PER_GAME", POSSESSIONS_PER_GAME)?;
    m.add("GAMES_TO_PLAY", GAMES_TO_PLAY)?;

    Ok(())
}
