//! Bisector graph: fixed small scenes plus randomized properties.

use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::geom2::Line2;

fn triangle() -> Voronoi {
    Voronoi::from_points([vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 2.0]])
}

/// Independent nearest-site scan (first minimum in `Point` order wins).
fn nearest(sites: &[Point], p: Vector2<f64>) -> Point {
    *sites
        .iter()
        .min_by(|a, b| {
            (a.vec() - p)
                .norm()
                .partial_cmp(&(b.vec() - p).norm())
                .unwrap()
        })
        .unwrap()
}

#[test]
fn empty_diagram_queries() {
    let v = Voronoi::new();
    assert!(v.is_empty());
    assert!(v.closest(vector![0.0, 0.0]).is_none());
    assert!(v.edges().is_empty());
    assert!(v.diagram_detail_extents().is_empty());
    assert!(v.edges_affected_by_add(vector![1.0, 1.0]).is_empty());
}

#[test]
fn single_site_has_no_edges() {
    let mut v = Voronoi::new();
    assert!(v.add(vector![0.3, 0.4]));
    assert!(v.edges().is_empty());
    assert_eq!(v.neighboring_edges(vector![0.3, 0.4]), Some(Vec::new()));
    assert_eq!(v.closest(vector![9.0, 9.0]), Some(Point::new(0.3, 0.4)));
}

#[test]
fn two_sites_keep_one_full_line() {
    let v = Voronoi::from_points([vector![0.0, 0.0], vector![2.0, 0.0]]);
    let edges = v.edges();
    assert_eq!(edges.len(), 1);
    let e = edges[0];
    assert_eq!(e.extents, Extent1::UNBOUNDED);
    assert!((e.mid() - vector![1.0, 0.0]).norm() < 1e-12);
    assert!(e.dir().x.abs() < 1e-12);
    assert!(v.is_neighbor_pair(vector![2.0, 0.0], vector![0.0, 0.0]));
}

#[test]
fn triangle_edges_are_rays_from_circumcenter() {
    let v = triangle();
    let edges = v.edges();
    assert_eq!(edges.len(), 3);
    let circumcenter = vector![1.0, 0.75];
    for e in &edges {
        assert!(e.extents.min <= e.extents.max);
        let finite = [e.extents.min, e.extents.max]
            .into_iter()
            .filter(|t| t.is_finite())
            .collect::<Vec<_>>();
        assert_eq!(finite.len(), 1, "expected a ray, got {:?}", e.extents);
        assert!((e.point_at(finite[0]) - circumcenter).norm() < 1e-9);
    }
    // Extents enclose the sites and the probes around the vertex.
    let ext = v.diagram_detail_extents();
    assert!(ext.contains(vector![0.0, 0.0]) && ext.contains(vector![1.0, 2.0]));
    assert!(ext.contains(circumcenter + vector![0.0, 1e-3]));
}

#[test]
fn collinear_sites_prune_the_skipping_pair() {
    let v = Voronoi::from_points([vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]]);
    let ids: Vec<_> = v.edges().iter().map(|e| e.id()).collect();
    assert_eq!(
        ids,
        vec![
            NeighborId::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
            NeighborId::new(Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
        ]
    );
    assert!(v.edges().iter().all(|e| e.extents == Extent1::UNBOUNDED));
    assert!(!v.is_neighbor_pair(vector![0.0, 0.0], vector![2.0, 0.0]));
}

#[test]
fn duplicate_add_is_a_noop() {
    let mut v = triangle();
    let before = v.edges();
    assert!(!v.add(vector![2.0, 0.0]));
    assert_eq!(v.len(), 3);
    assert_eq!(v.edges(), before);
}

#[test]
fn negative_zero_is_the_same_site() {
    let mut v = Voronoi::new();
    assert!(v.add(vector![0.0, 0.0]));
    assert!(v.add(vector![1.0, 0.0]));
    assert!(!v.add(vector![-0.0, 0.0]));
    assert!(!v.add(vector![0.0, -0.0]));
    assert_eq!(v.len(), 2);
    let edges = v.edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(
        edges[0].id(),
        NeighborId::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0))
    );
    assert!(edges[0].dir().iter().all(|c| c.is_finite()));
}

#[test]
fn neighbors_of_a_site() {
    let v = triangle();
    let pts = v.neighboring_points(vector![0.0, 0.0]).unwrap();
    assert_eq!(pts, vec![Point::new(2.0, 0.0), Point::new(1.0, 2.0)]);
    let edges = v.neighboring_edges(vector![1.0, 2.0]).unwrap();
    assert_eq!(edges.len(), 2);
    assert!(edges.iter().all(|e| e.id().contains(Point::new(1.0, 2.0))));
    assert!(v.neighboring_points(vector![5.0, 5.0]).is_none());
    assert!(v.neighboring_edges(vector![5.0, 5.0]).is_none());
}

#[test]
#[should_panic(expected = "not supported")]
fn remove_is_unsupported() {
    let mut v = triangle();
    v.remove(vector![0.0, 0.0]);
}

#[test]
#[should_panic(expected = "finite")]
fn non_finite_site_is_rejected() {
    let mut v = Voronoi::new();
    v.add(vector![f64::NAN, 0.0]);
}

#[test]
fn affected_edges_at_existing_site_is_empty() {
    let v = triangle();
    assert!(v.edges_affected_by_add(vector![1.0, 2.0]).is_empty());
}

#[test]
fn affected_edges_at_vertex_is_everything() {
    let v = triangle();
    let affected = v.edges_affected_by_add(vector![1.0, 0.75]);
    assert_eq!(affected, v.edges());
}

#[test]
fn affected_edges_far_below_includes_bottom_ray() {
    let v = triangle();
    let affected = v.edges_affected_by_add(vector![1.0, -10.0]);
    let bottom = NeighborId::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
    assert!(affected.iter().any(|e| e.id() == bottom));
    let all = v.edges();
    assert!(affected.iter().all(|e| all.contains(e)));
}

#[test]
fn edge_geometry_helpers() {
    let id = NeighborId::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
    // pt_a - pt_b = (-2, 0) → dir = (0, -1).
    let e = Edge::new(id, Extent1::new(-1.0, f64::INFINITY));
    assert!((e.dir() - vector![0.0, -1.0]).norm() < 1e-12);
    // Closest point clamps to the finite end at (1, 1).
    assert!((e.closest_pt_on_edge(vector![1.0, 5.0]) - vector![1.0, 1.0]).norm() < 1e-12);
    assert!((e.distance_to_point(vector![4.0, -3.0]) - 3.0).abs() < 1e-12);
    assert!((e.min_pt(10.0) - vector![1.0, 1.0]).norm() < 1e-12);
    assert!((e.max_pt(10.0) - vector![1.0, -10.0]).norm() < 1e-12);
    let (a, b) = e.clamped_segment(4.0);
    assert!((a - vector![1.0, 1.0]).norm() < 1e-12);
    assert!((b - vector![1.0, -4.0]).norm() < 1e-12);

    let below = Line2::new(vector![0.0, -2.0], vector![1.0, 0.0]).unwrap();
    let above = Line2::new(vector![0.0, 2.0], vector![1.0, 0.0]).unwrap();
    let vertical = Line2::new(vector![5.0, 0.0], vector![0.0, 1.0]).unwrap();
    assert!(e.intersects_line(&below, 1e-4));
    assert!(!e.intersects_line(&above, 1e-4));
    assert!(!e.intersects_line(&vertical, 1e-4));
}

#[test]
fn static_edge_intersection() {
    let a = Edge::unbounded(NeighborId::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0)));
    let b = Edge::unbounded(NeighborId::new(Point::new(0.0, 0.0), Point::new(0.0, 2.0)));
    let t = Voronoi::<BruteForce>::edges_intersect(&a, &b, 1e-4).unwrap();
    assert!((a.point_at(t) - vector![1.0, 1.0]).norm() < 1e-12);
    let c = Edge::unbounded(NeighborId::new(Point::new(0.0, 5.0), Point::new(2.0, 5.0)));
    assert!(Voronoi::<BruteForce>::edges_intersect(&a, &c, 1e-4).is_none());
}

#[test]
fn closest_matches_brute_force_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut v = Voronoi::new();
    for _ in 0..12 {
        v.add(vector![rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)]);
        for _ in 0..20 {
            let q = vector![rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)];
            assert_eq!(v.closest(q), v.brute_closest(q));
            assert_eq!(v.closest(q), Some(nearest(&v.points(), q)));
        }
    }
}

#[test]
fn custom_strategy_is_used_on_add() {
    #[derive(Clone, Debug)]
    struct NoEdges;
    impl GraphRebuild for NoEdges {
        fn rebuild(&self, _sites: &BTreeSet<Point>, _cfg: &GeomCfg) -> Topology {
            Topology::default()
        }
    }
    let mut v = Voronoi::with_strategy(NoEdges, GeomCfg::default());
    v.add(vector![0.0, 0.0]);
    v.add(vector![1.0, 0.0]);
    assert_eq!(v.len(), 2);
    assert!(v.edges().is_empty());
}

/// Distances from `q` to every site, nearest first (ties in `Point` order).
fn ranked(sites: &[Point], q: Vector2<f64>) -> Vec<(f64, Point)> {
    let mut out: Vec<(f64, Point)> = sites.iter().map(|&s| ((s.vec() - q).norm(), s)).collect();
    out.sort_by(|x, y| x.0.total_cmp(&y.0).then(x.1.cmp(&y.1)));
    out
}

/// `(steps + 1)²` samples over the site box padded by half a unit.
fn sample_grid(sites: &[Point], steps: usize) -> Vec<Vector2<f64>> {
    let mut ext = Extent2::empty();
    for s in sites {
        ext.enclose(s.vec());
    }
    let lo = ext.min - vector![0.5, 0.5];
    let span = ext.size() + vector![1.0, 1.0];
    let n = steps as f64;
    (0..=steps)
        .flat_map(|i| {
            (0..=steps).map(move |j| lo + vector![span.x * i as f64 / n, span.y * j as f64 / n])
        })
        .collect()
}

fn site_sets() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), 3..8)
        .prop_map(|v| v.into_iter().map(|(x, y)| Vector2::new(x, y)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn neighbor_relation_matches_midpoint_brute_force(pts in site_sets()) {
        let v = Voronoi::from_points(pts);
        let sites = v.points();
        for (i, &a) in sites.iter().enumerate() {
            for &b in &sites[i + 1..] {
                let mid = (a.vec() + b.vec()) * 0.5;
                let c = nearest(&sites, mid);
                let expected = c == a || c == b;
                prop_assert_eq!(v.is_neighbor_pair(a.vec(), b.vec()), expected);
            }
        }
    }

    #[test]
    fn grid_nearest_pairs_agree_with_the_graph(pts in site_sets()) {
        let v = Voronoi::from_points(pts);
        let sites = v.points();
        if sites.len() < 2 {
            return Ok(());
        }
        let edge_ids: BTreeSet<NeighborId> = v.edges().iter().map(|e| e.id()).collect();

        let mut samples = sample_grid(&sites, 40);
        for (i, &a) in sites.iter().enumerate() {
            for &b in &sites[i + 1..] {
                samples.push((a.vec() + b.vec()) * 0.5);
            }
        }

        let mut tied = BTreeSet::new();
        for q in samples {
            let r = ranked(&sites, q);
            let ((d1, a), (d2, b)) = (r[0], r[1]);
            let d3 = r.get(2).map_or(f64::INFINITY, |x| x.0);
            if d2 - d1 <= 1e-12 {
                tied.insert(NeighborId::new(a, b));
            }
            // Sliding q onto the a/b bisector moves every distance by at most `shift`;
            // with room to spare the pair owns a stretch of bisector there.
            let shift = (d2 * d2 - d1 * d1) / (2.0 * (a.vec() - b.vec()).norm());
            if d3 - d2 - 2.0 * shift >= 1e-2 {
                prop_assert!(
                    edge_ids.contains(&NeighborId::new(a, b)),
                    "pair {} {} owns the bisector near {:?} but has no edge", a, b, q
                );
            }
        }
        for pair in v.neighbor_pairs() {
            prop_assert!(tied.contains(&pair), "neighbor {:?} never ties for nearest", pair);
        }
    }

    #[test]
    fn extents_are_ordered_and_interiors_belong_to_the_pair(pts in site_sets()) {
        let v = Voronoi::from_points(pts);
        let sites = v.points();
        for e in v.edges() {
            prop_assert!(e.extents.min <= e.extents.max, "bad extents {:?}", e.extents);
            let t = match (e.extents.is_min_bounded(), e.extents.is_max_bounded()) {
                (true, true) => 0.5 * (e.extents.min + e.extents.max),
                (true, false) => e.extents.min + 0.5,
                (false, true) => e.extents.max - 0.5,
                (false, false) => 0.0,
            };
            let q = e.point_at(t);
            let d_pair = (q - e.pt_a.vec()).norm();
            let d_best = (q - nearest(&sites, q).vec()).norm();
            prop_assert!(d_pair <= d_best + 5e-3, "edge {:?} interior not owned by its pair", e);
        }
    }

    #[test]
    fn add_is_idempotent_and_order_invariant(pts in site_sets()) {
        let v = Voronoi::from_points(pts.clone());
        let mut again = v.clone();
        for &p in &pts {
            prop_assert!(!again.add(p));
        }
        prop_assert_eq!(again.edges(), v.edges());

        let reversed = Voronoi::from_points(pts.iter().rev().copied());
        prop_assert_eq!(reversed.edges(), v.edges());
        prop_assert_eq!(reversed.neighbor_pairs(), v.neighbor_pairs());
        prop_assert_eq!(reversed.diagram_detail_extents(), v.diagram_detail_extents());
    }

    #[test]
    fn midpoint_neighbors_keep_an_edge(pts in site_sets()) {
        let v = Voronoi::from_points(pts);
        let ids: BTreeSet<NeighborId> = v.edges().iter().map(|e| e.id()).collect();
        for pair in v.neighbor_pairs() {
            prop_assert!(ids.contains(&pair), "midpoint neighbor {:?} lost its edge", pair);
        }
    }
}
