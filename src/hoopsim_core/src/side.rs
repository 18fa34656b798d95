use std::fmt;
use std::str::FromStr;

use crate::error::SimError;

/// One of the two competing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// The other side. An involution: `s.opposite().opposite() == s`.
    pub fn opposite(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Position of this side in two-element arrays
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Side {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Side::A),
            "B" => Ok(Side::B),
            other => Err(SimError::UnknownSide(other.to_string())),
        }
    }
}

/// Kind of field goal attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShotType {
    TwoPoint,
    ThreePoint,
}

impl ShotType {
    /// Points awarded when the shot goes in
    pub fn points(self) -> u32 {
        match self {
            ShotType::TwoPoint => 2,
            ShotType::ThreePoint => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShotType::TwoPoint => "two_point",
            ShotType::ThreePoint => "three_point",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShotType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two_point" | "two_pts" => Ok(ShotType::TwoPoint),
            "three_point" | "three_pts" => Ok(ShotType::ThreePoint),
            other => Err(SimError::UnknownShotType(other.to_string())),
        }
    }
}
