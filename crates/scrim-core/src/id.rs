//! Strongly-typed identifiers and the [`Location`] grid coordinate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a body (robot or building) for its whole lifetime.
///
/// Assigned by the upstream simulator; unique among live bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub i32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for BodyId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Identifies a team. `TeamId(0)` is the neutral team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub i32);

impl TeamId {
    /// The neutral team; never has team statistics.
    pub const NEUTRAL: TeamId = TeamId(0);

    /// Whether this is the neutral team.
    pub fn is_neutral(self) -> bool {
        self == Self::NEUTRAL
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TeamId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// An integer grid location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Location {
    /// Construct a location.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
