//! Read-only neighborhood and impact queries.

use std::collections::BTreeSet;

use nalgebra::Vector2;

use crate::geom2::Point;

use super::build::GraphRebuild;
use super::types::{Edge, NeighborId};
use super::Voronoi;

impl<R: GraphRebuild> Voronoi<R> {
    /// Edges incident to `site`, or `None` if `site` was never added.
    pub fn neighboring_edges(&self, site: Vector2<f64>) -> Option<Vec<Edge>> {
        let site = Point::from(site);
        if !self.sites.contains(&site) {
            return None;
        }
        Some(
            self.edges
                .iter()
                .filter(|(id, _)| id.contains(site))
                .map(|(&id, &ext)| Edge::new(id, ext))
                .collect(),
        )
    }

    /// Sites sharing an edge with `site` (in `Point` order), or `None` if
    /// `site` was never added.
    pub fn neighboring_points(&self, site: Vector2<f64>) -> Option<Vec<Point>> {
        let edges = self.neighboring_edges(site)?;
        let site = Point::from(site);
        let set: BTreeSet<Point> = edges.iter().filter_map(|e| e.id().other(site)).collect();
        Some(set.into_iter().collect())
    }

    /// Edges that would change if a site were inserted at `candidate`.
    ///
    /// Walks outward from the nearest site. An edge is flagged when any of six
    /// probe points on it is at least as close to `candidate` as to the
    /// frontier site; both endpoint sites of a flagged edge join the frontier.
    /// Open edge ends are probed at `2·max(extent width, extent height)`.
    pub fn edges_affected_by_add(&self, candidate: Vector2<f64>) -> Vec<Edge> {
        let Some(start) = self.closest(candidate) else {
            return Vec::new();
        };
        if start == Point::from(candidate) {
            return Vec::new();
        }
        let size = self.extents.size();
        let max_dim = 2.0 * size.x.max(size.y);

        let mut affected: BTreeSet<NeighborId> = BTreeSet::new();
        let mut visited: BTreeSet<Point> = BTreeSet::new();
        let mut frontier = vec![start];
        while let Some(site) = frontier.pop() {
            if !visited.insert(site) {
                continue;
            }
            let s = site.vec();
            for edge in self.neighboring_edges(s).unwrap_or_default() {
                let probes = [
                    edge.closest_pt_on_edge(candidate),
                    edge.closest_pt_on_edge(s),
                    edge.closest_pt_on_edge(edge.pt_a.vec()),
                    edge.closest_pt_on_edge(edge.pt_b.vec()),
                    edge.min_pt(max_dim),
                    edge.max_pt(max_dim),
                ];
                let any_chance = probes
                    .iter()
                    .any(|&q| (candidate - q).norm() <= (s - q).norm());
                if any_chance {
                    affected.insert(edge.id());
                    frontier.push(edge.pt_a);
                    frontier.push(edge.pt_b);
                }
            }
        }

        tracing::trace!(
            visited = visited.len(),
            affected = affected.len(),
            "edges affected by add"
        );
        affected
            .into_iter()
            .filter_map(|id| self.edges.get(&id).map(|&ext| Edge::new(id, ext)))
            .collect()
    }
}
