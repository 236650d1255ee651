//! Criterion benchmarks for merge-chain construction.
//! Focus sizes: n in {16, 64, 256, 1024} points folded onto one side of y = 0.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use vormerge::geom2::rand::{draw_points, fold_onto_positive_side, ReplayToken, ScatterCfg};
use vormerge::geom2::Line2;
use vormerge::merge_chain::HalfSpaceChain;

fn bench_chain(c: &mut Criterion) {
    let origin = Vector2::new(0.0, 0.0);
    let dir = Vector2::new(1.0, 0.0);
    let Some(line) = Line2::new(origin, dir) else {
        return;
    };
    let mut group = c.benchmark_group("merge_chain");
    for &n in &[16usize, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("build", n), &n, |b, &n| {
            let cfg = ScatterCfg {
                count: n,
                min: Vector2::new(-1.0, -1.0),
                ..ScatterCfg::default()
            };
            b.iter_batched(
                || fold_onto_positive_side(&line, &draw_points(cfg, ReplayToken::new(7))),
                |pts| {
                    let _chain = HalfSpaceChain::new(origin, dir, &pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chain);
criterion_main!(benches);
