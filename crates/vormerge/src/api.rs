//! Curated internal API (UNSTABLE).
//!
//! A convenience surface for the CLI and experiments; breaking changes are
//! allowed.

// Shared 2D primitives
pub use crate::geom2::{
    bisector, line_intersection, line_intersection_param, perp, Extent1, Extent2, GeomCfg, Line2,
    Point,
};
// Random scenes
pub use crate::geom2::rand::{
    draw_points, fold_onto_positive_side, Layout, ReplayToken as SceneReplay, ScatterCfg,
};
// Bisector graph
pub use crate::voronoi::{
    brute_closest, edges_intersect, BruteForce, Edge, GraphRebuild, NeighborId, Topology, Voronoi,
};
// Merge chain
pub use crate::error::ChainError;
pub use crate::merge_chain::{Arc as ChainArc, HalfSpaceChain};
// Border classification
pub use crate::border::{classify_points, is_border, PointClassification, Side, SplitDiagrams};
