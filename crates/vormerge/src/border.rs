//! Side and border classification against a dividing line.
//!
//! Purpose
//! - Split a point set by a `Line2` into one Voronoi diagram per side and mark
//!   the sites whose cells reach the line. Those border sites are the only
//!   ones a merge along the line can touch; everything else keeps its cell.
//!
//! Model
//! - Side: `Line2::on_positive_side` (points on the line count as positive).
//! - Border: the site is nearest to some point of the line. Either an edge of
//!   its cell crosses the line within its extent, or no edge crosses and the
//!   whole line lies in one cell, the one owning `line.origin`. Cells are
//!   convex, so owning a point beyond the line implies owning one on it.
//!
//! Code cross-refs: `voronoi::Edge::intersects_line`, `merge_chain::HalfSpaceChain`.

use std::collections::BTreeMap;

use nalgebra::Vector2;

use crate::geom2::{Line2, Point};
use crate::voronoi::Voronoi;

/// Which side of a dividing line a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Positive,
    Negative,
}

impl Side {
    /// Points on the line count as `Positive`.
    pub fn of(line: &Line2, p: Vector2<f64>) -> Self {
        if line.on_positive_side(p) {
            Side::Positive
        } else {
            Side::Negative
        }
    }
}

/// Side of a site and whether its cell reaches the dividing line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointClassification {
    pub side: Side,
    pub border: bool,
}

/// One diagram per side of a dividing line.
#[derive(Clone, Debug)]
pub struct SplitDiagrams {
    pub line: Line2,
    pub positive: Voronoi,
    pub negative: Voronoi,
}

impl SplitDiagrams {
    /// Panics on non-finite points (see `Voronoi::add`).
    pub fn build(line: Line2, points: &[Vector2<f64>]) -> Self {
        let (pos, neg): (Vec<Vector2<f64>>, Vec<Vector2<f64>>) =
            points.iter().copied().partition(|&p| line.on_positive_side(p));
        let positive = Voronoi::from_points(pos);
        let negative = Voronoi::from_points(neg);
        tracing::debug!(
            positive = positive.len(),
            negative = negative.len(),
            "split diagrams"
        );
        Self {
            line,
            positive,
            negative,
        }
    }

    #[inline]
    pub fn diagram(&self, side: Side) -> &Voronoi {
        match side {
            Side::Positive => &self.positive,
            Side::Negative => &self.negative,
        }
    }

    /// Border flag for every site in both diagrams.
    pub fn classify(&self) -> BTreeMap<Point, PointClassification> {
        let mut out = BTreeMap::new();
        for side in [Side::Positive, Side::Negative] {
            let diagram = self.diagram(side);
            for p in diagram.points() {
                let border = owns_line_point(diagram, p, &self.line);
                out.insert(p, PointClassification { side, border });
            }
        }
        out
    }
}

fn owns_line_point(diagram: &Voronoi, site: Point, line: &Line2) -> bool {
    if diagram.closest(line.origin) == Some(site) {
        return true;
    }
    let eps = diagram.cfg().eps_parallel;
    diagram
        .neighboring_edges(site.vec())
        .unwrap_or_default()
        .iter()
        .any(|e| e.intersects_line(line, eps))
}

/// Whether a site inserted at `location` would own a piece of `line`.
///
/// Works on a clone; `diagram` is left untouched. Same rule as
/// `SplitDiagrams::classify`, so a location added to an empty diagram is border.
pub fn is_border(location: Vector2<f64>, line: &Line2, diagram: &Voronoi) -> bool {
    let mut with_site = diagram.clone();
    with_site.add(location);
    owns_line_point(&with_site, Point::from(location), line)
}

/// Split `points` by `line` and classify each distinct point.
pub fn classify_points(line: &Line2, points: &[Vector2<f64>]) -> BTreeMap<Point, PointClassification> {
    let out = SplitDiagrams::build(*line, points).classify();
    tracing::debug!(
        points = out.len(),
        border = out.values().filter(|c| c.border).count(),
        "classified points"
    );
    out
}
