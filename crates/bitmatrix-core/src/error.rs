//! Error types shared by every BitMatrix crate.
//!
//! All grid operations validate eagerly and fail before allocating or
//! mutating anything, so a returned error never leaves a partially
//! updated grid behind.

use crate::id::{Coord, Shape};
use std::error::Error;
use std::fmt;

/// Errors from grid construction, cell access, and grid operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside the grid, or has the wrong number of axes.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Shape of the grid that was indexed.
        shape: Shape,
    },
    /// A rectangular block does not fully fit inside a grid.
    BlockOutOfBounds {
        /// Block origin within the grid.
        origin: Coord,
        /// Block extent per axis.
        extent: Shape,
        /// Shape of the grid the block was placed against.
        shape: Shape,
    },
    /// A named property is absent at an in-bounds coordinate.
    PropertyNotFound {
        /// The coordinate that was queried.
        coord: Coord,
        /// The missing property name.
        name: String,
    },
    /// A malformed operation parameter (scale factor, threshold, enum name).
    InvalidArgument {
        /// What went wrong.
        reason: String,
    },
    /// A search pattern cannot be matched against the target grid.
    IncompatiblePattern {
        /// What went wrong.
        reason: String,
    },
    /// Two grids combined by an operation differ in rank or shape.
    IncompatibleOperands {
        /// What went wrong.
        reason: String,
    },
    /// The operation does not support grids of this rank.
    TypeMismatch {
        /// Name of the rejecting operation.
        operation: &'static str,
        /// Human-readable description of the accepted ranks.
        expected: &'static str,
        /// Rank of the grid that was passed.
        ndim: usize,
    },
    /// Unknown kinetic transform name.
    InvalidTransformKind {
        /// The name that failed to parse.
        kind: String,
    },
    /// A shape is not a valid grid shape.
    InvalidShape {
        /// What went wrong.
        reason: String,
    },
    /// More bits were supplied than the target grid can hold.
    CapacityExceeded {
        /// Number of bits supplied.
        len: usize,
        /// Cell count of the target grid.
        capacity: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, shape } => {
                write!(f, "coordinate {coord:?} out of bounds for shape {shape:?}")
            }
            Self::BlockOutOfBounds {
                origin,
                extent,
                shape,
            } => write!(
                f,
                "block of extent {extent:?} at {origin:?} does not fit in shape {shape:?}"
            ),
            Self::PropertyNotFound { coord, name } => {
                write!(f, "property '{name}' not found at {coord:?}")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::IncompatiblePattern { reason } => write!(f, "incompatible pattern: {reason}"),
            Self::IncompatibleOperands { reason } => {
                write!(f, "incompatible operands: {reason}")
            }
            Self::TypeMismatch {
                operation,
                expected,
                ndim,
            } => write!(f, "{operation} requires {expected}, got a {ndim}-axis grid"),
            Self::InvalidTransformKind { kind } => {
                write!(f, "invalid kinetic transform kind '{kind}'")
            }
            Self::InvalidShape { reason } => write!(f, "invalid shape: {reason}"),
            Self::CapacityExceeded { len, capacity } => write!(
                f,
                "data length ({len}) exceeds capacity of target shape ({capacity})"
            ),
        }
    }
}

impl Error for GridError {}
