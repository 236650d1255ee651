mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use vormerge::border::{classify_points, Side};
use vormerge::geom2::rand::{draw_points, Layout, ReplayToken, ScatterCfg};
use vormerge::geom2::{Extent2, Line2, Point};
use vormerge::merge_chain::HalfSpaceChain;
use vormerge::voronoi::Voronoi;
use vormerge::Vec2;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "vormerge-cli")]
#[command(about = "Build Voronoi diagrams and merge chains from point scenes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Where the points come from: a CSV with `x`,`y` columns or a seeded draw.
#[derive(Args, Debug)]
struct Scene {
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 16)]
    count: usize,
    /// Use a jittered grid (fraction of a cell) instead of uniform scatter
    #[arg(long)]
    jitter: Option<f64>,
}

#[derive(Args, Debug)]
struct Divider {
    #[arg(long, value_parser = parse_vec2, default_value = "0,0.5")]
    origin: Vec2<f64>,
    #[arg(long, value_parser = parse_vec2, default_value = "1,0")]
    direction: Vec2<f64>,
}

#[derive(Subcommand)]
enum Action {
    /// Build the bisector graph and summarize it
    Diagram {
        #[command(flatten)]
        scene: Scene,
        /// Report the edges an insertion at x,y would touch
        #[arg(long, value_parser = parse_vec2)]
        query: Option<Vec2<f64>>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Build the arc chain along a dividing line
    Chain {
        #[command(flatten)]
        scene: Scene,
        #[command(flatten)]
        divider: Divider,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Count per-side and border sites for a dividing line
    Classify {
        #[command(flatten)]
        scene: Scene,
        #[command(flatten)]
        divider: Divider,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Diagram { scene, query, out } => diagram(scene, query, out),
        Action::Chain {
            scene,
            divider,
            out,
        } => chain(scene, divider, out),
        Action::Classify { scene, divider } => classify(scene, divider),
        Action::Report => report(),
    }
}

fn parse_vec2(s: &str) -> Result<Vec2<f64>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(format!("non-finite coordinates in {s:?}"));
    }
    Ok(Vec2::new(x, y))
}

/// Read `x`,`y` columns as f64; rows with a missing or non-finite value are an error.
fn load_csv(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => out.push(Vec2::new(x, y)),
            _ => bail!("row {row} of {} has a missing or non-finite coordinate", path.display()),
        }
    }
    tracing::info!(rows = out.len(), path = %path.display(), "loaded csv");
    Ok(out)
}

fn load_scene(scene: &Scene) -> Result<Vec<Vec2<f64>>> {
    if let Some(path) = &scene.input {
        return load_csv(path);
    }
    let layout = match scene.jitter {
        Some(jitter) => Layout::JitteredGrid { jitter },
        None => Layout::Uniform,
    };
    let cfg = ScatterCfg {
        count: scene.count,
        layout,
        ..ScatterCfg::default()
    };
    Ok(draw_points(cfg, ReplayToken::new(scene.seed)))
}

fn divider_line(divider: &Divider) -> Result<Line2> {
    Line2::new(divider.origin, divider.direction)
        .context("dividing line needs a non-zero direction")
}

fn xy(v: Vec2<f64>) -> [f64; 2] {
    [v.x, v.y]
}

fn pt(p: Point) -> [f64; 2] {
    [p.x(), p.y()]
}

fn extents_json(e: &Extent2) -> Option<[[f64; 2]; 2]> {
    (!e.is_empty()).then(|| [xy(e.min), xy(e.max)])
}

#[derive(Serialize)]
struct DiagramSummary {
    sites: usize,
    edges: usize,
    bounded_edges: usize,
    neighbor_pairs: usize,
    extents: Option<[[f64; 2]; 2]>,
    affected_by_query: Option<Vec<[[f64; 2]; 2]>>,
}

fn diagram(scene: Scene, query: Option<Vec2<f64>>, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(?scene, ?query, "diagram");
    let pts = load_scene(&scene)?;
    let v = Voronoi::from_points(pts);
    let edges = v.edges();
    let affected = query.map(|q| {
        v.edges_affected_by_add(q)
            .iter()
            .map(|e| [pt(e.pt_a), pt(e.pt_b)])
            .collect::<Vec<_>>()
    });
    let summary = DiagramSummary {
        sites: v.len(),
        edges: edges.len(),
        bounded_edges: edges.iter().filter(|e| e.extents.is_bounded()).count(),
        neighbor_pairs: v.neighbor_pairs().len(),
        extents: extents_json(&v.diagram_detail_extents()),
        affected_by_query: affected,
    };
    tracing::info!(
        sites = summary.sites,
        edges = summary.edges,
        bounded = summary.bounded_edges,
        affected = summary.affected_by_query.as_ref().map(Vec::len),
        "diagram built"
    );
    let params = json!({
        "input": scene.input,
        "seed": scene.seed,
        "count": scene.count,
        "jitter": scene.jitter,
        "query": query.map(xy),
    });
    emit(&summary, out, Payload::new("diagram", params))
}

#[derive(Serialize)]
struct ArcSummary {
    pt_a: [f64; 2],
    pt_b: [f64; 2],
    center: [f64; 2],
    radius: f64,
}

#[derive(Serialize)]
struct ChainSummary {
    points: usize,
    arcs: Vec<ArcSummary>,
    ruled_out: Vec<[f64; 2]>,
}

fn chain(scene: Scene, divider: Divider, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(?scene, ?divider, "chain");
    let pts = load_scene(&scene)?;
    let line = divider_line(&divider)?;
    // The chain expects one side only; keep the positive side.
    let side: Vec<Vec2<f64>> = pts
        .iter()
        .copied()
        .filter(|&p| line.on_positive_side(p))
        .collect();
    let c = HalfSpaceChain::new(divider.origin, divider.direction, &side)
        .context("building merge chain")?;
    let summary = ChainSummary {
        points: side.len(),
        arcs: c
            .arcs_along_line()
            .iter()
            .map(|a| ArcSummary {
                pt_a: pt(a.pt_a),
                pt_b: pt(a.pt_b),
                center: xy(a.center),
                radius: a.radius,
            })
            .collect(),
        ruled_out: c.ruled_out().iter().copied().map(pt).collect(),
    };
    tracing::info!(
        points = summary.points,
        arcs = summary.arcs.len(),
        ruled_out = summary.ruled_out.len(),
        "chain built"
    );
    let params = json!({
        "input": scene.input,
        "seed": scene.seed,
        "count": scene.count,
        "jitter": scene.jitter,
        "origin": xy(divider.origin),
        "direction": xy(divider.direction),
    });
    emit(&summary, out, Payload::new("chain", params))
}

fn classify(scene: Scene, divider: Divider) -> Result<()> {
    tracing::info!(?scene, ?divider, "classify");
    let pts = load_scene(&scene)?;
    let line = divider_line(&divider)?;
    let classes = classify_points(&line, &pts);
    let count = |side: Side, border_only: bool| {
        classes
            .values()
            .filter(|c| c.side == side && (!border_only || c.border))
            .count()
    };
    let obj = json!({
        "positive": count(Side::Positive, false),
        "negative": count(Side::Negative, false),
        "border_positive": count(Side::Positive, true),
        "border_negative": count(Side::Negative, true),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Print `summary`, and with `out` also write it plus a provenance sidecar.
fn emit<T: Serialize>(summary: &T, out: Option<PathBuf>, payload: Payload) -> Result<()> {
    let body = serde_json::to_vec_pretty(summary)?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(&out, body).with_context(|| format!("writing {}", out.display()))?;
    let prov = write_sidecar(&out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote summary");
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new("report", json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
