use thiserror::Error;

/// Errors raised while building or loading a simulation.
///
/// Everything here is a configuration or programming error; nothing is
/// transient and nothing is retried.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid probability for {field}: {value} is outside [0, 1]")]
    InvalidProbability { field: String, value: f64 },

    #[error("Invalid count for {field}: must be positive")]
    InvalidCount { field: String },

    #[error("Unknown side: {0:?} (expected \"A\" or \"B\")")]
    UnknownSide(String),

    #[error("Unknown shot type: {0:?}")]
    UnknownShotType(String),

    #[error("Scripted random source needs at least one draw")]
    EmptyScript,

    #[error("Statistics error: {0}")]
    Stats(String),

    #[error("No games have been played")]
    NoGamesPlayed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type SimResult<T> = std::result::Result<T, SimError>;
