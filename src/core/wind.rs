//! Wind: compass direction, strength, and the per-turn random walk.
//!
//! Wind deflects every shot before it lands. Between turn cycles it
//! drifts: strength takes a bounded step and the direction rotates a few
//! compass points either way. Both samples come from the session's
//! [`GameRng`], so the drift replays under the same seed.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Strength deltas sampled on each drift step.
const STRENGTH_STEPS: [i32; 4] = [-1, 0, 1, 2];

/// Compass rotations sampled on each drift step.
const ROTATION_STEPS: [i32; 5] = [-2, -1, 0, 1, 2];

/// One of the eight compass points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The compass in rotation order, clockwise from north.
    pub const COMPASS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit `(row, col)` deflection for this direction.
    ///
    /// North points toward row 0, east toward the last column.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Rotate `steps` compass points clockwise (negative for
    /// counter-clockwise), wrapping around the compass.
    #[must_use]
    pub fn rotated(self, steps: i32) -> Self {
        let index = (self.compass_index() as i32 + steps)
            .rem_euclid(Self::COMPASS.len() as i32) as usize;
        Self::COMPASS[index]
    }

    fn compass_index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::NorthEast => 1,
            Direction::East => 2,
            Direction::SouthEast => 3,
            Direction::South => 4,
            Direction::SouthWest => 5,
            Direction::West => 6,
            Direction::NorthWest => 7,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        };
        write!(f, "{label}")
    }
}

/// Current wind over the battlefield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wind {
    /// Where the wind blows toward.
    pub direction: Direction,
    /// Drift in cells applied to a shot.
    pub strength: u8,
}

impl Wind {
    /// Create a wind state.
    #[must_use]
    pub const fn new(direction: Direction, strength: u8) -> Self {
        Self {
            direction,
            strength,
        }
    }

    /// Total `(row, col)` displacement applied to a shot.
    #[must_use]
    pub fn displacement(self) -> (i32, i32) {
        let (row, col) = self.direction.offset();
        let strength = i32::from(self.strength);
        (row * strength, col * strength)
    }

    /// One step of the bounded random walk.
    ///
    /// Strength moves by a step from {-1, 0, 1, 2} and clamps into
    /// `[0, max_strength]`; the direction rotates by a step from
    /// {-2, ..., 2}.
    pub fn advance(&mut self, rng: &mut GameRng, max_strength: u8) {
        let delta = rng.choose(&STRENGTH_STEPS).copied().unwrap_or(0);
        let strength = (i32::from(self.strength) + delta).clamp(0, i32::from(max_strength));
        self.strength = strength as u8;

        let steps = rng.choose(&ROTATION_STEPS).copied().unwrap_or(0);
        self.direction = self.direction.rotated(steps);

        log::trace!("wind drifted to {}", self);
    }
}

impl std::fmt::Display for Wind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.direction, self.strength)
    }
}
