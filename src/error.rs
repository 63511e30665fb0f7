//! Error types for cell selection.

use thiserror::Error;

/// Errors raised by geometry construction and selection.
///
/// Undersupply (fewer candidates than requested) is not an error; it is
/// reported on [`crate::Selection`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("cannot select {k} from an empty candidate set")]
    EmptyCandidates { k: usize },

    #[error("polygon needs at least 3 vertices, got {vertices}")]
    DegeneratePolygon { vertices: usize },

    #[error("polygon has a non-finite coordinate")]
    NonFiniteCoordinate,

    #[error("group {group} is empty")]
    EmptyGroup { group: usize },

    #[error("unknown label: {0}")]
    UnknownLabel(String),
}

pub type Result<T> = std::result::Result<T, SelectionError>;
