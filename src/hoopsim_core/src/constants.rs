/// Possessions in one game; held fixed for every game in a season
pub const POSSESSIONS_PER_GAME: u32 = 200;

/// Games simulated per season
pub const GAMES_TO_PLAY: u32 = 1000;

/// Free throw percentage. Carried in the ability model but never sampled:
/// no foul mechanic exists.
pub const DEFAULT_FREE_THROW_PCT: f64 = 1.0;

/// Two-point field goal percentage shared by both default teams
pub const DEFAULT_TWO_POINT_PCT: f64 = 0.405;

/// Three-point field goal percentage shared by both default teams
pub const DEFAULT_THREE_POINT_PCT: f64 = 0.27;

/// Offensive rebound percentage shared by both default teams
pub const DEFAULT_OFFENSIVE_REBOUND_PCT: f64 = 0.24;

/// Shot selection weights `(two_point, three_point)` for team A, which only shoots threes
pub const THREE_POINT_HEAVY_SELECTION: (f64, f64) = (0.0, 1.0);

/// Shot selection weights `(two_point, three_point)` for team B, which never shoots threes
pub const TWO_POINT_HEAVY_SELECTION: (f64, f64) = (1.0, 0.0);

/// Probability of side A winning the opening jump ball
pub const JUMP_BALL_PCT: f64 = 0.5;
