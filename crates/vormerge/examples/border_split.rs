//! Split a random scene by a dividing line and merge-chain each side.
//!
//! Purpose
//! - Show the three pieces working together: per-side diagrams, border sites,
//!   and the arc chain that a merge along the line would walk.
//!
//! Run: `cargo run -p vormerge --example border_split`

use nalgebra::Vector2;
use vormerge::border::{Side, SplitDiagrams};
use vormerge::geom2::rand::{draw_points, fold_onto_positive_side, Layout, ReplayToken, ScatterCfg};
use vormerge::geom2::Line2;
use vormerge::merge_chain::HalfSpaceChain;

fn main() {
    let origin = Vector2::new(0.0, 0.5);
    let dir = Vector2::new(1.0, 0.2);
    let line = Line2::new(origin, dir).expect("non-zero direction");
    let cfg = ScatterCfg {
        count: 24,
        layout: Layout::JitteredGrid { jitter: 0.35 },
        ..ScatterCfg::default()
    };
    let pts = draw_points(cfg, ReplayToken::new(5));

    let split = SplitDiagrams::build(line, &pts);
    let classes = split.classify();
    for side in [Side::Positive, Side::Negative] {
        let d = split.diagram(side);
        let border = classes
            .values()
            .filter(|c| c.side == side && c.border)
            .count();
        println!(
            "{side:?}: sites={} edges={} border={border}",
            d.len(),
            d.edges().len()
        );
    }

    let folded = fold_onto_positive_side(&line, &pts);
    let chain = HalfSpaceChain::new(origin, dir, &folded).expect("chain builds");
    println!(
        "chain: arcs={} accepted={} ruled_out={}",
        chain.len(),
        chain.accepted_points().len(),
        chain.ruled_out().len()
    );
    for arc in chain.arcs_along_line() {
        println!(
            "  {} -> {} center=({:.3}, {:.3}) r={:.3}",
            arc.pt_a, arc.pt_b, arc.center.x, arc.center.y, arc.radius
        );
    }
}
