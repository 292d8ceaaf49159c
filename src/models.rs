//! Core data models for qcompass
//!
//! Defines the two angular reference systems and the static reference data
//! shown next to them:
//! - `Axis`: which convention a value is expressed in (QCAD or compass)
//! - `Cardinal` / `Landmark`: named directions at multiples of 90°
//! - Formula reminders for each direction of conversion

use serde::{Deserialize, Serialize};
use std::fmt;

/// An angular reference system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// 0° = East, counterclockwise-positive
    Qcad,
    /// 0° = North, clockwise-positive
    Compass,
}

/// Direction in which angles grow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Clockwise,
    Counterclockwise,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Qcad, Axis::Compass];

    /// The axis a value of this axis converts into.
    pub fn other(self) -> Axis {
        match self {
            Axis::Qcad => Axis::Compass,
            Axis::Compass => Axis::Qcad,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::Qcad => "QCAD",
            Axis::Compass => "Compass",
        }
    }

    /// Direction that 0° points at
    pub fn zero(self) -> Cardinal {
        match self {
            Axis::Qcad => Cardinal::East,
            Axis::Compass => Cardinal::North,
        }
    }

    pub fn rotation(self) -> Rotation {
        match self {
            Axis::Qcad => Rotation::Counterclockwise,
            Axis::Compass => Rotation::Clockwise,
        }
    }

    /// Landmark angles in ascending order (0, 90, 180, 270).
    pub fn landmarks(self) -> [Landmark; 4] {
        use Cardinal::*;
        let directions = match self {
            Axis::Qcad => [East, North, West, South],
            Axis::Compass => [North, East, South, West],
        };
        let mut degrees = 0;
        directions.map(|direction| {
            let landmark = Landmark { degrees, direction };
            degrees += 90;
            landmark
        })
    }

    /// Formula reminder for converting a value of this axis into the other one.
    pub fn formula(self) -> &'static str {
        match self {
            Axis::Qcad => "Compass = (90 - QCAD) mod 360",
            Axis::Compass => "QCAD = (90 - Compass) mod 360",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Clockwise => f.write_str("clockwise"),
            Rotation::Counterclockwise => f.write_str("counterclockwise"),
        }
    }
}

/// Cardinal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    pub fn name(self) -> &'static str {
        match self {
            Cardinal::North => "North",
            Cardinal::East => "East",
            Cardinal::South => "South",
            Cardinal::West => "West",
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named direction at a whole-quarter angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    pub degrees: u16,
    pub direction: Cardinal,
}
