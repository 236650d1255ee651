//! Lines, perpendicular bisectors, and line/line intersection.
//!
//! Parallelism is decided on the cross product of the two directions; with
//! unit directions this is `sin(angle)` and compared against `eps_parallel`.

use nalgebra::{Matrix2, Vector2};

/// Rotate 90° counter-clockwise: `(x, y) ↦ (-y, x)`.
#[inline]
pub fn perp(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Perpendicular bisector of `a` and `b` as `(midpoint, unit direction)`.
///
/// The direction is `perp(normalize(a - b))`. `None` if `a == b` or non-finite.
#[inline]
pub fn bisector(a: Vector2<f64>, b: Vector2<f64>) -> Option<(Vector2<f64>, Vector2<f64>)> {
    let d = a - b;
    let norm = d.norm();
    if !norm.is_finite() || norm <= 0.0 {
        return None;
    }
    Some(((a + b) * 0.5, perp(d / norm)))
}

/// Parameter `t` along line 1 where `o1 + t·d1` meets the line `o2 + s·d2`.
///
/// Returns `None` when `|d1 × d2| < eps` (parallel within tolerance).
pub fn line_intersection_param(
    o1: Vector2<f64>,
    d1: Vector2<f64>,
    o2: Vector2<f64>,
    d2: Vector2<f64>,
    eps: f64,
) -> Option<f64> {
    // Solve [d1, -d2] (t, s)^T = o2 - o1.
    let m = Matrix2::from_columns(&[d1, -d2]);
    let det = m.determinant();
    if !det.is_finite() || det.abs() < eps {
        return None;
    }
    let ts = m.try_inverse()? * (o2 - o1);
    let t = ts[0];
    t.is_finite().then_some(t)
}

/// Intersection point of two infinite lines, or `None` if parallel within `eps`.
#[inline]
pub fn line_intersection(
    o1: Vector2<f64>,
    d1: Vector2<f64>,
    o2: Vector2<f64>,
    d2: Vector2<f64>,
    eps: f64,
) -> Option<Vector2<f64>> {
    line_intersection_param(o1, d1, o2, d2, eps).map(|t| o1 + d1 * t)
}

/// Infinite directed line `origin + s·dir` with unit `dir`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub origin: Vector2<f64>,
    pub dir: Vector2<f64>,
}

impl Line2 {
    /// Normalizes `direction`; `None` if it has zero length or anything is non-finite.
    pub fn new(origin: Vector2<f64>, direction: Vector2<f64>) -> Option<Self> {
        let norm = direction.norm();
        if !norm.is_finite() || norm <= 0.0 || !origin.x.is_finite() || !origin.y.is_finite() {
            return None;
        }
        Some(Self {
            origin,
            dir: direction / norm,
        })
    }
    /// Scalar projection of `p` onto the line (signed distance along `dir`).
    #[inline]
    pub fn project(&self, p: Vector2<f64>) -> f64 {
        (p - self.origin).dot(&self.dir)
    }
    #[inline]
    pub fn point_at(&self, s: f64) -> Vector2<f64> {
        self.origin + self.dir * s
    }
    /// Left-hand unit normal `perp(dir)`.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        perp(self.dir)
    }
    /// Signed distance from the line, positive on the `normal()` side.
    #[inline]
    pub fn signed_distance(&self, p: Vector2<f64>) -> f64 {
        (p - self.origin).dot(&self.normal())
    }
    /// Points exactly on the line count as positive.
    #[inline]
    pub fn on_positive_side(&self, p: Vector2<f64>) -> bool {
        self.signed_distance(p) >= 0.0
    }
    /// Mirror image of `p` across the line.
    #[inline]
    pub fn reflect(&self, p: Vector2<f64>) -> Vector2<f64> {
        p - self.normal() * (2.0 * self.signed_distance(p))
    }
    /// Parameter along `self` where `other` crosses it.
    #[inline]
    pub fn intersect_param(&self, other: &Line2, eps: f64) -> Option<f64> {
        line_intersection_param(self.origin, self.dir, other.origin, other.dir, eps)
    }
}
