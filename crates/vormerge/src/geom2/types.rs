//! Basic 2D value types shared by the bisector graph and the merge chain.
//!
//! - `GeomCfg`: centralizes the epsilons used by geometric decisions.
//! - `Point`: ordered, exactly-compared key wrapper around `Vector2<f64>`.
//! - `Extent1`: 1D parametric interval with infinite sentinels.
//! - `Extent2`: axis-aligned bounding box with an "enclose" mutator.
//!
//! Two notions of "equal" live here on purpose: `Point` compares exactly and is
//! only used for identity (set/map keys); everything geometric works on the raw
//! `Vector2<f64>` with an explicit epsilon from `GeomCfg`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Lines whose direction cross product is below this are treated as parallel.
    pub eps_parallel: f64,
    /// Offset along an edge used to decide whether a crossing is a topology event.
    pub eps_probe: f64,
    /// Offset along an edge used to decide which side of an event the edge survives on.
    pub eps_extent: f64,
    /// Slack for "exactly on the arc" in merge-chain classification.
    pub eps_circle: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_parallel: 1e-4,
            eps_probe: 1e-4,
            eps_extent: 1e-3,
            eps_circle: 1e-4,
        }
    }
}

/// Immutable 2D point used as a set/map key.
///
/// Invariants:
/// - Total order: y first, then x (`f64::total_cmp`).
/// - Equality is exact and agrees with the order; no epsilon is involved.
/// - Negative zero is stored as `+0.0`, so `(-0.0, 0.0)` and `(0.0, 0.0)` are
///   the same key.
#[derive(Clone, Copy, Debug)]
pub struct Point(Vector2<f64>);

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        // `-0.0 + 0.0 == +0.0`; every other value passes through unchanged.
        Self(Vector2::new(x + 0.0, y + 0.0))
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }
    /// Raw coordinates for geometric work.
    #[inline]
    pub fn vec(&self) -> Vector2<f64> {
        self.0
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.0
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .y
            .total_cmp(&other.0.y)
            .then_with(|| self.0.x.total_cmp(&other.0.x))
    }
}
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Point {}
impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // `total_cmp` equality is bit equality; zeros are already canonical.
        self.0.x.to_bits().hash(state);
        self.0.y.to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

/// Parametric interval `[min, max]`; `min = -∞` / `max = +∞` mark an open end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent1 {
    pub min: f64,
    pub max: f64,
}

impl Extent1 {
    /// Both ends open (a full line).
    pub const UNBOUNDED: Extent1 = Extent1 {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    #[inline]
    pub fn is_min_bounded(&self) -> bool {
        self.min != f64::NEG_INFINITY
    }
    #[inline]
    pub fn is_max_bounded(&self) -> bool {
        self.max != f64::INFINITY
    }
    /// Finite segment (both ends known).
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.is_min_bounded() && self.is_max_bounded()
    }
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.min && t <= self.max
    }
    /// Clamp `t` into the interval. If `min > max` the result is `min`.
    #[inline]
    pub fn clamp(&self, t: f64) -> f64 {
        self.min.max(self.max.min(t))
    }
    /// Replace open ends with `±limit` (for drawing or probing "at infinity").
    #[inline]
    pub fn clamped(&self, limit: f64) -> Extent1 {
        Extent1 {
            min: self.min.max(-limit),
            max: self.max.min(limit),
        }
    }
}

impl Default for Extent1 {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Axis-aligned bounding box; starts empty (`min = +∞`, `max = -∞`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Extent2 {
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Vector2::new(f64::INFINITY, f64::INFINITY),
            max: Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }
    /// Grow to contain `p`.
    #[inline]
    pub fn enclose(&mut self, p: Vector2<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }
    /// Width and height; zero for an empty box.
    #[inline]
    pub fn size(&self) -> Vector2<f64> {
        if self.is_empty() {
            Vector2::zeros()
        } else {
            self.max - self.min
        }
    }
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl Default for Extent2 {
    fn default() -> Self {
        Self::empty()
    }
}
