//! Error types for merge-chain construction.

use thiserror::Error;

use crate::geom2::Point;

/// Inputs the merge chain cannot resolve into arcs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    /// The dividing line direction has zero length (or is not finite).
    #[error("dividing line needs a finite, non-zero direction")]
    DegenerateLine,

    /// An input point has a NaN or infinite coordinate.
    #[error("non-finite input point {0}")]
    NonFinite(Point),

    /// Two distinct points project to the same place on the dividing line.
    #[error("points {a} and {b} share a projection onto the dividing line")]
    SharedProjection { a: Point, b: Point },

    /// The bisector of the pair is (nearly) parallel to the dividing line.
    #[error("bisector of {less} and {more} is parallel to the dividing line")]
    ParallelBisector { less: Point, more: Point },
}
