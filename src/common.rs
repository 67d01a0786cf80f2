//! Common types for the grid engine: shot outcomes and error values.

use core::fmt;

use crate::config::{FLEET_SIZE, MAX_INDEX, MIN_INDEX};

/// Result of a shot that passed coordinate validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    /// A ship was struck and is now sunk.
    Hit,
    /// Open water, or a ship already sunk.
    Miss,
}

/// Classification of a turn as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
    /// Coordinates were rejected; nothing was fired.
    Invalid,
}

impl From<Shot> for Outcome {
    fn from(shot: Shot) -> Self {
        match shot {
            Shot::Hit => Outcome::Hit,
            Shot::Miss => Outcome::Miss,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hit => write!(f, "Hit"),
            Outcome::Miss => write!(f, "Miss"),
            Outcome::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Which coordinate failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

/// A row or column outside `[MIN_INDEX, MAX_INDEX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError {
    pub axis: Axis,
    pub value: i32,
}

impl OutOfRangeError {
    pub const fn new(axis: Axis, value: i32) -> Self {
        Self { axis, value }
    }

    /// Inclusive bounds the value was checked against.
    pub const fn bound(&self) -> (i32, i32) {
        (MIN_INDEX, MAX_INDEX)
    }
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.bound();
        write!(
            f,
            "invalid {axis} value: {axis} = {}, want between {} & {}",
            self.value,
            lo,
            hi,
            axis = self.axis
        )
    }
}

/// Errors returned by ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Coordinates failed validation.
    OutOfRange(OutOfRangeError),
    /// Target cell already holds a ship, afloat or sunk.
    AlreadyOccupied { row: i32, col: i32 },
    /// The grid already holds a complete fleet.
    CapacityExceeded,
}

impl From<OutOfRangeError> for PlacementError {
    fn from(err: OutOfRangeError) -> Self {
        PlacementError::OutOfRange(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfRange(e) => write!(f, "{}", e),
            PlacementError::AlreadyOccupied { row, col } => write!(
                f,
                "ship already placed at coordinates row: {} and column: {}",
                row, col
            ),
            PlacementError::CapacityExceeded => {
                write!(f, "too many ships: fleet of {} already placed", FLEET_SIZE)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRangeError {}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlacementError::OutOfRange(e) => Some(e),
            _ => None,
        }
    }
}
