use thiserror::Error;

use crate::topology::ElementKind;

/// Top-level error type for the porenet crate.
#[derive(Debug, Error)]
pub enum PorenetError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to the network topology and element selections.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("{kind} index {index} is out of range for {count} {kind}s")]
    IndexOutOfRange {
        kind: ElementKind,
        index: usize,
        count: usize,
    },

    #[error("{kind} mask has length {actual}, expected {expected}")]
    ShapeMismatch {
        kind: ElementKind,
        expected: usize,
        actual: usize,
    },

    #[error("label not found: {0}")]
    LabelNotFound(String),
}

/// Errors related to neighbor queries.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid query mode: {0}")]
    InvalidMode(String),

    #[error("labels {first} and {second} overlap at pore {pore}")]
    OverlappingLabels {
        first: String,
        second: String,
        pore: usize,
    },
}

/// Errors related to throat geometry properties.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("property not found: {0}")]
    PropertyNotFound(String),

    #[error("property {key} is not a {expected} field")]
    PropertyKind { key: String, expected: &'static str },

    #[error("property {key} has {actual} entries, expected {expected}")]
    ShapeMismatch {
        key: String,
        expected: usize,
        actual: usize,
    },
}

/// Convenience type alias for results using [`PorenetError`].
pub type Result<T> = std::result::Result<T, PorenetError>;
