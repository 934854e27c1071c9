//! Core error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `From` impls where a core failure can surface.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown direction '{0}' (expected north, east, south or west)")]
    UnknownDirection(String),

    #[error("direction index {0} out of range 0..4")]
    DirectionIndex(usize),
}

/// Shorthand result type for `inv-core`.
pub type CoreResult<T> = Result<T, CoreError>;
