//! Planar Voronoi building blocks.
//!
//! - `voronoi`: a site set whose bisector graph is rebuilt on every insertion.
//! - `merge_chain`: the arc chain along a dividing line used to merge two
//!   half-plane diagrams.
//! - `border`: per-side diagrams and the sites whose cells reach the line.
//!
//! API Policy
//! - The crate is consumed by the workspace CLI, benches and examples. There is
//!   no stable public API; `api` collects the names callers are expected to use.

pub mod api;
pub mod border;
pub mod error;
pub mod geom2;
pub mod merge_chain;
pub mod voronoi;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ChainError;
pub use geom2::{GeomCfg, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::border::{classify_points, is_border, PointClassification, Side, SplitDiagrams};
    pub use crate::error::ChainError;
    pub use crate::geom2::rand::{draw_points, Layout, ReplayToken, ScatterCfg};
    pub use crate::geom2::{Extent1, Extent2, GeomCfg, Line2, Point};
    pub use crate::merge_chain::{Arc, HalfSpaceChain};
    pub use crate::voronoi::{Edge, NeighborId, Voronoi};
    pub use nalgebra::Vector2 as Vec2;
}
