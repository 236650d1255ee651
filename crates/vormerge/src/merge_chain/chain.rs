//! Arc chain construction by consuming the sorted points from both ends.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use nalgebra::Vector2;

use crate::error::ChainError;
use crate::geom2::{GeomCfg, Line2, Point};

use super::arc::Arc;

/// Chain of arcs along a dividing line for a point set on one side of it.
///
/// Invariants:
/// - Arcs are keyed by their `pt_a`; following `pt_b` → next key walks the
///   chain left to right along the line, covering `accepted_points()`.
/// - Every input point is either an arc endpoint or listed in `ruled_out()`.
#[derive(Clone, Debug)]
pub struct HalfSpaceChain {
    line: Line2,
    cfg: GeomCfg,
    arcs: BTreeMap<Point, Arc>,
    ruled_out: Vec<Point>,
}

impl HalfSpaceChain {
    /// Build with default tolerances. See `with_cfg`.
    pub fn new(
        origin: Vector2<f64>,
        direction: Vector2<f64>,
        points: &[Vector2<f64>],
    ) -> Result<Self, ChainError> {
        Self::with_cfg(origin, direction, points, GeomCfg::default())
    }

    /// Build the chain for `points` against the line `origin + s·direction`.
    ///
    /// Exact duplicates are collapsed. Fewer than two distinct points give an
    /// empty chain. Distinct points sharing a projection, or pairs whose
    /// bisector runs parallel to the line, cannot be merged and are reported.
    pub fn with_cfg(
        origin: Vector2<f64>,
        direction: Vector2<f64>,
        points: &[Vector2<f64>],
        cfg: GeomCfg,
    ) -> Result<Self, ChainError> {
        let line = Line2::new(origin, direction).ok_or(ChainError::DegenerateLine)?;
        let mut sorted = Vec::with_capacity(points.len());
        for &p in points {
            let p = Point::from(p);
            if !p.is_finite() {
                return Err(ChainError::NonFinite(p));
            }
            sorted.push(p);
        }
        sorted.sort();
        sorted.dedup();
        // Stable: equal projections keep `Point` order, so errors are deterministic.
        sorted.sort_by(|a, b| line.project(a.vec()).total_cmp(&line.project(b.vec())));
        for w in sorted.windows(2) {
            if line.project(w[0].vec()) == line.project(w[1].vec()) {
                return Err(ChainError::SharedProjection { a: w[0], b: w[1] });
            }
        }

        let mut chain = Self {
            line,
            cfg,
            arcs: BTreeMap::new(),
            ruled_out: Vec::new(),
        };
        chain.build(&sorted)?;
        tracing::debug!(
            points = sorted.len(),
            arcs = chain.arcs.len(),
            ruled_out = chain.ruled_out.len(),
            "built merge chain"
        );
        Ok(chain)
    }

    fn arc(&self, less: Point, more: Point) -> Result<Arc, ChainError> {
        Arc::between(&self.line, less, more, self.cfg.eps_parallel)
            .ok_or(ChainError::ParallelBisector { less, more })
    }

    fn beyond(&self, arc: &Arc, p: Point) -> bool {
        arc.classify(p.vec(), self.cfg.eps_circle) == Ordering::Greater
    }

    fn replace(&mut self, old: &Arc, new: &[Arc]) {
        self.arcs.remove(&old.pt_a);
        for a in new {
            self.arcs.insert(a.pt_a, *a);
        }
    }

    /// `sorted` is strictly increasing in projection.
    fn build(&mut self, sorted: &[Point]) -> Result<(), ChainError> {
        let n = sorted.len();
        if n < 2 {
            return Ok(());
        }
        let mut boundary = self.arc(sorted[0], sorted[n - 1])?;
        self.arcs.insert(boundary.pt_a, boundary);

        // Unconsumed points are sorted[lo..hi].
        let (mut lo, mut hi) = (1usize, n - 1);
        while lo < hi {
            if hi - lo == 1 {
                let p = sorted[lo];
                if self.beyond(&boundary, p) {
                    tracing::trace!(%p, "last point ruled out");
                    self.ruled_out.push(p);
                } else {
                    let left = self.arc(boundary.pt_a, p)?;
                    let right = self.arc(p, boundary.pt_b)?;
                    tracing::trace!(%p, "last point splits boundary arc");
                    self.replace(&boundary, &[left, right]);
                }
                lo += 1;
                continue;
            }

            let (l, r) = (sorted[lo], sorted[hi - 1]);
            // Beyond the boundary and beyond what the other extreme would put in front of it.
            let l_out = self.beyond(&boundary, l) && self.beyond(&self.arc(boundary.pt_a, r)?, l);
            let r_out = self.beyond(&boundary, r) && self.beyond(&self.arc(l, boundary.pt_b)?, r);
            tracing::trace!(%l, %r, l_out, r_out, "extremes");
            match (l_out, r_out) {
                (true, true) => {
                    self.ruled_out.push(l);
                    self.ruled_out.push(r);
                    lo += 1;
                    hi -= 1;
                }
                (true, false) => {
                    self.ruled_out.push(l);
                    lo += 1;
                }
                (false, true) => {
                    self.ruled_out.push(r);
                    hi -= 1;
                }
                (false, false) => {
                    let left = self.arc(boundary.pt_a, l)?;
                    let middle = self.arc(l, r)?;
                    let right = self.arc(r, boundary.pt_b)?;
                    self.replace(&boundary, &[left, middle, right]);
                    boundary = middle;
                    lo += 1;
                    hi -= 1;
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn line(&self) -> &Line2 {
        &self.line
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// All arcs; the order is not meaningful.
    pub fn arcs(&self) -> Vec<Arc> {
        self.arcs.values().copied().collect()
    }

    /// Arcs ordered left to right along the line.
    pub fn arcs_along_line(&self) -> Vec<Arc> {
        let mut out = self.arcs();
        out.sort_by(|a, b| {
            self.line
                .project(a.pt_a.vec())
                .total_cmp(&self.line.project(b.pt_a.vec()))
        });
        out
    }

    /// Arc endpoints ordered along the line.
    pub fn accepted_points(&self) -> Vec<Point> {
        let arcs = self.arcs_along_line();
        let mut out: Vec<Point> = arcs.iter().map(|a| a.pt_a).collect();
        if let Some(last) = arcs.last() {
            out.push(last.pt_b);
        }
        out
    }

    /// Points discarded during construction, in the order they were dropped.
    #[inline]
    pub fn ruled_out(&self) -> &[Point] {
        &self.ruled_out
    }

    /// Accepted point nearest to `line().point_at(s)`; ties go to the earlier one along the line.
    pub fn nearest_accepted(&self, s: f64) -> Option<Point> {
        let q = self.line.point_at(s);
        self.accepted_points()
            .into_iter()
            .min_by(|a, b| (a.vec() - q).norm().total_cmp(&(b.vec() - q).norm()))
    }
}
