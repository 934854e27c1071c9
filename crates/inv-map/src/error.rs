//! Map loading and validation errors.
//!
//! All of these are fatal: a map that fails to load never reaches the
//! simulation.

use thiserror::Error;

use inv_core::Direction;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: unknown direction '{value}'")]
    UnknownDirection { line: usize, value: String },

    #[error("line {line}: city '{name}' is already defined")]
    DuplicateCity { line: usize, name: String },

    #[error("line {line}: city '{city}' declares more than one road {direction}")]
    DuplicateRoad { line: usize, city: String, direction: Direction },

    #[error("map validation error: road {direction} from {from} to {to}, but {to} not found on map")]
    DanglingRoad { from: String, to: String, direction: Direction },

    /// A road that loops back to its own city would let an alien collide
    /// with itself when it moves.
    #[error("map validation error: road {direction} from {name} leads back to {name}")]
    SelfRoad { name: String, direction: Direction },

    #[error(
        "map validation error: road {direction} from {from} to {to}, but no back-road {} from {to} to {from}{}",
        .direction.opposite(),
        found_suffix(.found)
    )]
    MissingBackRoad {
        from:      String,
        to:        String,
        direction: Direction,
        found:     Option<String>,
    },
}

impl MapError {
    /// `true` for errors raised by the road-symmetry validator.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MapError::DanglingRoad { .. }
                | MapError::MissingBackRoad { .. }
                | MapError::SelfRoad { .. }
        )
    }
}

fn found_suffix(found: &Option<String>) -> String {
    match found {
        Some(other) => format!(" (it leads to {other})"),
        None        => String::new(),
    }
}

pub type MapResult<T> = Result<T, MapError>;
