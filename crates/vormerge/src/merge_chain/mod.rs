//! Dividing-Line Merge Chain.
//!
//! Purpose
//! - Given a dividing line and points on one side of it, build a chain of arcs
//!   centered on the line. Between consecutive accepted points the arc marks,
//!   for each location along the line, which of the two is nearer.
//! - This is the building block a divide-and-conquer Voronoi merge uses along
//!   the splitting line; the stitching step itself lives elsewhere (or not yet).
//!
//! Model
//! - Sort by projection onto the line, seed one arc from the two extremes, then
//!   consume the remaining extremes pairwise: a point beyond the current arc
//!   (and beyond the arc its counterpart would create) is ruled out, otherwise
//!   it splits the arc.
//! - Configurations the chain cannot order (shared projections, bisectors
//!   parallel to the line) are reported as `ChainError`.
//!
//! Code cross-refs: `geom2::{Line2, bisector, line_intersection}`, `crate::error::ChainError`.

mod arc;
mod chain;

pub use arc::Arc;
pub use chain::HalfSpaceChain;
