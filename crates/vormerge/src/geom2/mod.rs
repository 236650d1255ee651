//! Shared 2D primitives for the bisector graph and the merge chain.
//!
//! Purpose
//! - Provide the ordered point key (`Point`), parametric extents (`Extent1`,
//!   `Extent2`), directed lines (`Line2`), and the two geometric kernels both
//!   components rely on: line/line intersection and perpendicular bisectors.
//! - Keep tolerances in one place (`GeomCfg`) so every geometric decision is
//!   explicit about its epsilon.
//!
//! Code cross-refs: `voronoi::Edge`, `merge_chain::Arc`.

mod line;
pub mod rand;
mod types;

pub use line::{bisector, line_intersection, line_intersection_param, perp, Line2};
pub use types::{Extent1, Extent2, GeomCfg, Point};
