//! Data types for the bisector graph.
//!
//! Kept small and explicit to make `build` and `query` easy to read.

use std::collections::{BTreeMap, BTreeSet};

use nalgebra::Vector2;

use crate::geom2::{line_intersection_param, perp, Extent1, Extent2, Line2, Point};

/// Canonical unordered site pair: the lesser point (by `Point` order) comes first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NeighborId(Point, Point);

impl NeighborId {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
    #[inline]
    pub fn first(&self) -> Point {
        self.0
    }
    #[inline]
    pub fn second(&self) -> Point {
        self.1
    }
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.0 == p || self.1 == p
    }
    /// The partner of `p`, if `p` is one of the pair.
    #[inline]
    pub fn other(&self, p: Point) -> Option<Point> {
        if self.0 == p {
            Some(self.1)
        } else if self.1 == p {
            Some(self.0)
        } else {
            None
        }
    }
}

/// A piece of the perpendicular bisector of `pt_a` and `pt_b`.
///
/// The bisector is parameterized as `mid() + t·dir()`; `extents` bounds `t`
/// and uses infinite sentinels for rays and full lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub pt_a: Point,
    pub pt_b: Point,
    pub extents: Extent1,
}

impl Edge {
    #[inline]
    pub fn new(id: NeighborId, extents: Extent1) -> Self {
        Self {
            pt_a: id.first(),
            pt_b: id.second(),
            extents,
        }
    }
    /// Full bisector line (no bounds yet).
    #[inline]
    pub fn unbounded(id: NeighborId) -> Self {
        Self::new(id, Extent1::UNBOUNDED)
    }
    #[inline]
    pub fn id(&self) -> NeighborId {
        NeighborId::new(self.pt_a, self.pt_b)
    }
    #[inline]
    pub fn mid(&self) -> Vector2<f64> {
        (self.pt_a.vec() + self.pt_b.vec()) * 0.5
    }
    /// Unit direction `perp(normalize(pt_a - pt_b))`.
    #[inline]
    pub fn dir(&self) -> Vector2<f64> {
        perp((self.pt_a.vec() - self.pt_b.vec()).normalize())
    }
    #[inline]
    pub fn line(&self) -> Line2 {
        Line2 {
            origin: self.mid(),
            dir: self.dir(),
        }
    }
    #[inline]
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        self.mid() + self.dir() * t
    }
    /// Closest point to `p` on the bounded piece of the bisector.
    #[inline]
    pub fn closest_pt_on_edge(&self, p: Vector2<f64>) -> Vector2<f64> {
        let t_line = (p - self.mid()).dot(&self.dir());
        self.point_at(self.extents.clamp(t_line))
    }
    #[inline]
    pub fn distance_to_point(&self, p: Vector2<f64>) -> f64 {
        (self.closest_pt_on_edge(p) - p).norm()
    }
    /// Lower endpoint; an open end is replaced by `-max_dim`.
    #[inline]
    pub fn min_pt(&self, max_dim: f64) -> Vector2<f64> {
        let t = if self.extents.is_min_bounded() {
            self.extents.min
        } else {
            -max_dim
        };
        self.point_at(t)
    }
    /// Upper endpoint; an open end is replaced by `max_dim`.
    #[inline]
    pub fn max_pt(&self, max_dim: f64) -> Vector2<f64> {
        let t = if self.extents.is_max_bounded() {
            self.extents.max
        } else {
            max_dim
        };
        self.point_at(t)
    }
    /// Drawable endpoints with both ends clamped to `[-limit, limit]`.
    pub fn clamped_segment(&self, limit: f64) -> (Vector2<f64>, Vector2<f64>) {
        let e = self.extents.clamped(limit);
        (self.point_at(e.min), self.point_at(e.max))
    }
    /// Whether the bounded piece crosses the line `line` (parallel within `eps` = no).
    pub fn intersects_line(&self, line: &Line2, eps: f64) -> bool {
        match line_intersection_param(self.mid(), self.dir(), line.origin, line.dir, eps) {
            Some(t) => self.extents.contains(t),
            None => false,
        }
    }
}

/// Result of one full rebuild of the graph.
#[derive(Clone, Debug, Default)]
pub struct Topology {
    /// Pairs whose midpoint has one of the pair as nearest site.
    pub neighbors: BTreeSet<NeighborId>,
    /// Surviving edges and their parametric extents.
    pub edges: BTreeMap<NeighborId, Extent1>,
    /// Sites plus every accepted crossing probe.
    pub extents: Extent2,
}
