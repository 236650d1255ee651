//! Site Set & Bisector Graph: a brute-force planar Voronoi diagram.
//!
//! Purpose
//! - Own a growing set of sites; for every pair decide whether they neighbor
//!   and bound the shared piece of their perpendicular bisector.
//! - Answer point location (nearest site) and "which edges would an insertion
//!   here touch" without mutating the diagram.
//!
//! Why this design
//! - The whole topology is rebuilt on each insertion (`GraphRebuild`), so the
//!   structure carries no incremental edge state that could drift. The rebuild
//!   strategy is a type parameter; an incremental variant (e.g. a merge step
//!   built on `merge_chain`) can replace `BruteForce` without touching callers.
//! - Sites are `Point` keys with exact identity; geometric decisions go through
//!   `GeomCfg` epsilons.
//!
//! Note on module layout
//! - `types.rs` (pair key, edge, topology), `build.rs` (rebuild strategy and
//!   the brute-force kernels), `query.rs` (read-only queries).

mod build;
mod query;
mod types;

use std::collections::{BTreeMap, BTreeSet};

use nalgebra::Vector2;

use crate::geom2::{Extent1, Extent2, GeomCfg, Point};

pub use build::{brute_closest, edges_intersect, BruteForce, GraphRebuild};
pub use types::{Edge, NeighborId, Topology};

/// Voronoi diagram over a set of unique sites.
///
/// Invariants:
/// - `edges`, `neighbors` and `extents` always describe exactly `sites`.
/// - Every stored extent satisfies `min <= max` for non-degenerate input
///   (either end may be infinite).
#[derive(Clone, Debug)]
pub struct Voronoi<R: GraphRebuild = BruteForce> {
    sites: BTreeSet<Point>,
    neighbors: BTreeSet<NeighborId>,
    edges: BTreeMap<NeighborId, Extent1>,
    extents: Extent2,
    cfg: GeomCfg,
    rebuild: R,
}

impl Voronoi<BruteForce> {
    pub fn new() -> Self {
        Self::with_cfg(GeomCfg::default())
    }
    pub fn with_cfg(cfg: GeomCfg) -> Self {
        Self::with_strategy(BruteForce, cfg)
    }
    /// Build from a list of points (duplicates ignored).
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut v = Self::new();
        v.extend(points);
        v
    }
}

impl Default for Voronoi<BruteForce> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: GraphRebuild> Voronoi<R> {
    pub fn with_strategy(rebuild: R, cfg: GeomCfg) -> Self {
        Self {
            sites: BTreeSet::new(),
            neighbors: BTreeSet::new(),
            edges: BTreeMap::new(),
            extents: Extent2::empty(),
            cfg,
            rebuild,
        }
    }

    #[inline]
    pub fn cfg(&self) -> &GeomCfg {
        &self.cfg
    }

    /// Insert a site and rebuild the topology. Returns `false` (and changes
    /// nothing) if the site is already present.
    ///
    /// Panics on non-finite coordinates.
    pub fn add(&mut self, p: Vector2<f64>) -> bool {
        let site = Point::from(p);
        assert!(site.is_finite(), "site must have finite coordinates: {site}");
        if !self.sites.insert(site) {
            return false;
        }
        let topo = self.rebuild.rebuild(&self.sites, &self.cfg);
        self.neighbors = topo.neighbors;
        self.edges = topo.edges;
        self.extents = topo.extents;
        true
    }

    /// Insert several sites; returns how many were new.
    pub fn extend<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut added = 0;
        for p in points {
            if self.add(p) {
                added += 1;
            }
        }
        added
    }

    /// Site removal is not supported.
    ///
    /// Always panics; rebuild a diagram without the site instead.
    pub fn remove(&mut self, site: Vector2<f64>) {
        unimplemented!(
            "removing site {} from a Voronoi diagram is not supported",
            Point::from(site)
        )
    }

    /// Nearest site (brute force), `None` for an empty diagram.
    #[inline]
    pub fn closest(&self, p: Vector2<f64>) -> Option<Point> {
        self.brute_closest(p)
    }

    /// O(n) nearest site; ties keep the earliest site in `Point` order.
    #[inline]
    pub fn brute_closest(&self, p: Vector2<f64>) -> Option<Point> {
        brute_closest(&self.sites, p)
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.sites.contains(&Point::from(p))
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.sites.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// All sites in `Point` order.
    pub fn points(&self) -> Vec<Point> {
        self.sites.iter().copied().collect()
    }

    /// All surviving edges in `NeighborId` order.
    pub fn edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|(&id, &ext)| Edge::new(id, ext))
            .collect()
    }

    /// Bounding box of the sites and every detected edge crossing.
    ///
    /// The diagram itself is unbounded; with no crossings this is the box of the sites.
    #[inline]
    pub fn diagram_detail_extents(&self) -> Extent2 {
        self.extents
    }

    /// Whether `a` and `b` are a midpoint neighbor pair.
    pub fn is_neighbor_pair(&self, a: Vector2<f64>, b: Vector2<f64>) -> bool {
        self.neighbors
            .contains(&NeighborId::new(Point::from(a), Point::from(b)))
    }

    /// All midpoint neighbor pairs.
    pub fn neighbor_pairs(&self) -> Vec<NeighborId> {
        self.neighbors.iter().copied().collect()
    }

    /// Bisector-line intersection parameter along `a`, ignoring extents.
    #[inline]
    pub fn edges_intersect(a: &Edge, b: &Edge, eps: f64) -> Option<f64> {
        edges_intersect(a, b, eps)
    }
}

#[cfg(test)]
mod tests;
