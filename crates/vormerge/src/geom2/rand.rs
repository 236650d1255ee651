//! Random 2D site scenes (uniform scatter or jittered grid + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for site sets fed to the bisector
//!   graph and the merge chain by benches, tests, and the CLI.
//!
//! Model
//! - `Layout::Uniform` draws i.i.d. points in the box `[min, max]`.
//! - `Layout::JitteredGrid` places one point per grid cell (row-major, first
//!   `count` cells) and perturbs it by up to `jitter` cell sizes, which keeps
//!   sites well separated for larger scenes.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::line::Line2;

/// Placement model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Layout {
    Uniform,
    /// `jitter` is a fraction of the cell size, clamped to [0, 0.49].
    JitteredGrid { jitter: f64 },
}

/// Scatter configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    pub layout: Layout,
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 16,
            layout: Layout::Uniform,
            min: Vector2::new(0.0, 0.0),
            max: Vector2::new(1.0, 1.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }
    /// Same seed, next index.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points. Exact duplicates are possible only for degenerate boxes.
pub fn draw_points(cfg: ScatterCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.min;
    let span = cfg.max - cfg.min;
    match cfg.layout {
        Layout::Uniform => (0..cfg.count)
            .map(|_| {
                Vector2::new(
                    lo.x + rng.gen::<f64>() * span.x,
                    lo.y + rng.gen::<f64>() * span.y,
                )
            })
            .collect(),
        Layout::JitteredGrid { jitter } => {
            if cfg.count == 0 {
                return Vec::new();
            }
            let jitter = jitter.clamp(0.0, 0.49);
            let cols = (cfg.count as f64).sqrt().ceil() as usize;
            let rows = cfg.count.div_ceil(cols);
            let cell = Vector2::new(span.x / cols as f64, span.y / rows as f64);
            (0..cfg.count)
                .map(|k| {
                    let (r, c) = (k / cols, k % cols);
                    let jx = (rng.gen::<f64>() * 2.0 - 1.0) * jitter;
                    let jy = (rng.gen::<f64>() * 2.0 - 1.0) * jitter;
                    Vector2::new(
                        lo.x + (c as f64 + 0.5 + jx) * cell.x,
                        lo.y + (r as f64 + 0.5 + jy) * cell.y,
                    )
                })
                .collect()
        }
    }
}

/// Mirror every point on the negative side of `line` onto the positive side.
///
/// Useful to feed the merge chain, which expects all points on one side.
pub fn fold_onto_positive_side(line: &Line2, points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    points
        .iter()
        .map(|&p| {
            if line.on_positive_side(p) {
                p
            } else {
                line.reflect(p)
            }
        })
        .collect()
}
