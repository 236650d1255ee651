//! Topology rebuild for the bisector graph.
//!
//! The only strategy today is `BruteForce`: every insertion recomputes the
//! neighbor relation, every edge, and the extents from the full site set.
//! Cost is O(n^5) per insertion (O(n^2) edge pairs, O(n) nearest-site scans per
//! probe), acceptable for the interactive scene sizes this is used with.

use std::collections::{BTreeMap, BTreeSet};

use nalgebra::Vector2;

use crate::geom2::{Extent1, Extent2, GeomCfg, Point};

use super::types::{Edge, NeighborId, Topology};

/// Strategy that derives the full topology from a site set.
///
/// Implementations must be deterministic in the site *set* (not insertion order).
pub trait GraphRebuild {
    fn rebuild(&self, sites: &BTreeSet<Point>, cfg: &GeomCfg) -> Topology;
}

/// Exhaustive recomputation; the reference behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl GraphRebuild for BruteForce {
    fn rebuild(&self, sites: &BTreeSet<Point>, cfg: &GeomCfg) -> Topology {
        let mut extents = Extent2::empty();
        for s in sites {
            extents.enclose(s.vec());
        }

        // Pass 1: neighbor relation + one provisional unbounded edge per pair.
        let list: Vec<Point> = sites.iter().copied().collect();
        let mut neighbors = BTreeSet::new();
        let mut provisional: Vec<Edge> = Vec::with_capacity(list.len() * list.len() / 2);
        for (i, &a) in list.iter().enumerate() {
            for &b in &list[i + 1..] {
                let id = NeighborId::new(a, b);
                let mid = (a.vec() + b.vec()) * 0.5;
                if is_between(sites, mid, id) {
                    neighbors.insert(id);
                }
                provisional.push(Edge::unbounded(id));
            }
        }

        // Pass 2: bound each edge by the crossings that are real topology events.
        let mut edges = BTreeMap::new();
        let mut pruned = 0usize;
        for (i, edge) in provisional.iter().enumerate() {
            let id = edge.id();
            let mut ext = Extent1::UNBOUNDED;
            let mut crossings = 0usize;
            let mut accepted = 0usize;
            for (j, other) in provisional.iter().enumerate() {
                if i == j {
                    continue;
                }
                let Some(t) = edges_intersect(edge, other, cfg.eps_parallel) else {
                    continue;
                };
                crossings += 1;
                let other_id = other.id();
                let event = is_between(sites, edge.point_at(t + cfg.eps_probe), other_id)
                    || is_between(sites, edge.point_at(t - cfg.eps_probe), other_id);
                if !event {
                    continue;
                }
                // Slightly up for min, slightly down for max.
                let min_pt = edge.point_at(t + cfg.eps_extent);
                if is_between(sites, min_pt, id) {
                    ext.min = ext.min.max(t);
                    extents.enclose(min_pt);
                    accepted += 1;
                }
                let max_pt = edge.point_at(t - cfg.eps_extent);
                if is_between(sites, max_pt, id) {
                    ext.max = ext.max.min(t);
                    extents.enclose(max_pt);
                    accepted += 1;
                }
            }
            // A neighbor pair whose bisector meets nothing (two sites, collinear
            // sites) is a full line.
            if accepted > 0 || (crossings == 0 && neighbors.contains(&id)) {
                edges.insert(id, ext);
            } else {
                pruned += 1;
            }
        }

        tracing::debug!(
            sites = sites.len(),
            neighbors = neighbors.len(),
            edges = edges.len(),
            pruned,
            "rebuilt bisector graph"
        );
        Topology {
            neighbors,
            edges,
            extents,
        }
    }
}

/// Parameter along `a.dir()` where the bisector lines of `a` and `b` cross.
///
/// Ignores the edges' extents; `None` when the lines are parallel within `eps`.
#[inline]
pub fn edges_intersect(a: &Edge, b: &Edge, eps: f64) -> Option<f64> {
    a.line().intersect_param(&b.line(), eps)
}

/// O(n) nearest site; ties keep the earliest site in `Point` order.
pub fn brute_closest(sites: &BTreeSet<Point>, p: Vector2<f64>) -> Option<Point> {
    let mut best: Option<(Point, f64)> = None;
    for &s in sites {
        let d = (s.vec() - p).norm();
        if best.as_ref().map_or(true, |(_, bd)| d < *bd) {
            best = Some((s, d));
        }
    }
    best.map(|(s, _)| s)
}

/// Whether the nearest site to `p` is one of the pair `id`.
#[inline]
fn is_between(sites: &BTreeSet<Point>, p: Vector2<f64>, id: NeighborId) -> bool {
    brute_closest(sites, p).is_some_and(|c| id.contains(c))
}
