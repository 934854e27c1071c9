//! The four cardinal road directions.
//!
//! Directions are encoded canonically as `north = 0, east = 1, south = 2,
//! west = 3`.  Every enumeration of a city's roads walks this order, so the
//! only non-determinism in a run is the random index drawn into that list.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    North = 0,
    East  = 1,
    South = 2,
    West  = 3,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Canonical 0..3 index, usable as an array slot.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> CoreResult<Direction> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CoreError::DirectionIndex(index))
    }

    /// The direction pointing back: `(d + 2) mod 4`.
    #[inline]
    pub fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 2) % 4]
    }

    /// Lowercase name as written in map files.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East  => "east",
            Direction::South => "south",
            Direction::West  => "west",
        }
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Direction> {
        match s {
            "north" => Ok(Direction::North),
            "east"  => Ok(Direction::East),
            "south" => Ok(Direction::South),
            "west"  => Ok(Direction::West),
            other   => Err(CoreError::UnknownDirection(other.to_owned())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
