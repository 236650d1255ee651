//! Circular arcs centered on the dividing line.

use std::cmp::Ordering;
use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::geom2::{bisector, line_intersection, Line2, Point};

/// Piece of the circle through `pt_a` and `pt_b` whose center lies on the
/// dividing line. Every point of the circle on the dividing line is equally
/// far from `pt_a` and `pt_b` when it is the center, so the arc marks where
/// the two points trade places as "nearest".
///
/// Invariants:
/// - `pt_a` projects strictly before `pt_b` onto the line it was built for.
/// - `min_rad <= max_rad` and `max_rad - min_rad <= π` (the smaller sweep).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Vector2<f64>,
    pub radius: f64,
    pub min_rad: f64,
    pub max_rad: f64,
    pub pt_a: Point,
    pub pt_b: Point,
}

impl Arc {
    /// Arc around an explicit `center`; radius is `|center - pt_a|`.
    pub fn from_center(center: Vector2<f64>, pt_a: Point, pt_b: Point) -> Self {
        let da = pt_a.vec() - center;
        let db = pt_b.vec() - center;
        let rads_a = da.y.atan2(da.x);
        let rads_b = db.y.atan2(db.x);
        let (lo, hi) = if rads_a <= rads_b {
            (rads_a, rads_b)
        } else {
            (rads_b, rads_a)
        };
        // Take the other way round when the direct sweep exceeds a half turn.
        let (min_rad, max_rad) = if hi - lo > PI {
            (hi, lo + 2.0 * PI)
        } else {
            (lo, hi)
        };
        Self {
            center,
            radius: da.norm(),
            min_rad,
            max_rad,
            pt_a,
            pt_b,
        }
    }

    /// Arc for the pair `(less, more)` against `line`: centered where the pair's
    /// perpendicular bisector meets the line.
    ///
    /// Returns `None` if the bisector is parallel to the line within `eps`.
    /// Panics if `less` does not project strictly before `more`.
    pub fn between(line: &Line2, less: Point, more: Point, eps: f64) -> Option<Self> {
        assert!(
            line.project(less.vec()) < line.project(more.vec()),
            "arc endpoints out of order along the dividing line: {less} must precede {more}"
        );
        let (mid, dir) = bisector(less.vec(), more.vec())?;
        let center = line_intersection(line.origin, line.dir, mid, dir, eps)?;
        Some(Self::from_center(center, less, more))
    }

    /// Point on the arc for `t ∈ [0, 1]`, sweeping from `min_rad` to `max_rad`.
    #[inline]
    pub fn point(&self, t: f64) -> Vector2<f64> {
        let a = self.min_rad + t * (self.max_rad - self.min_rad);
        self.center + Vector2::new(a.cos(), a.sin()) * self.radius
    }

    /// Where `p` sits relative to the circle:
    /// `Less` strictly inside (between the arc and the line), `Equal` on the
    /// circle within `eps`, `Greater` beyond it.
    ///
    /// Only the circle is tested, not the angular span.
    pub fn classify(&self, p: Vector2<f64>, eps: f64) -> Ordering {
        let d = (p - self.center).norm();
        if (d - self.radius).abs() <= eps {
            Ordering::Equal
        } else if d < self.radius {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}
