//! Error handling for DrawKit.
//!
//! The engine is designed so that almost everything the host can do is a
//! recovered no-op or a coerced input; the error surface is small and
//! uses `thiserror` throughout.

use thiserror::Error;

/// DrawKit error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bounding box was requested for an empty point sequence.
    ///
    /// Shapes with no points are inert and must be guarded by the caller
    /// before geometry queries.
    #[error("cannot compute the bounding box of an empty point sequence")]
    EmptyPointSequence,

    /// A shape was created from a raw point list of the wrong arity.
    #[error("{kind} needs at least {needed} point(s), got {got}")]
    InsufficientPoints {
        /// Name of the shape kind being created.
        kind: &'static str,
        /// Minimum number of points the kind requires.
        needed: usize,
        /// Number of points actually supplied.
        got: usize,
    },
}

/// Convenience result alias for DrawKit operations.
pub type Result<T> = std::result::Result<T, Error>;
