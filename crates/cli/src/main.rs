use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull2d::io::{read_points, write_hull, write_points};
use hull2d::rand::{draw_points, CloudShape, PointCloudCfg, ReplayToken};
use hull2d::svg::export_svg;
use hull2d::{Algorithm, Hull, Point};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod provenance;

use provenance::{write_sidecar, RunRecord};

#[derive(Parser)]
#[command(name = "hull")]
#[command(about = "Planar convex hulls: exhaustive edge test vs monotone chain")]
struct Cmd {
    /// Log at debug level (RUST_LOG takes precedence when set)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgoArg {
    /// O(n³) exhaustive pair test
    Brute,
    /// O(n log n) monotone chain
    Graham,
}

impl From<AlgoArg> for Algorithm {
    fn from(a: AlgoArg) -> Self {
        match a {
            AlgoArg::Brute => Algorithm::BruteForce,
            AlgoArg::Graham => Algorithm::MonotoneChain,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Disk,
    Square,
    Circle,
}

impl From<ShapeArg> for CloudShape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Disk => CloudShape::Disk,
            ShapeArg::Square => CloudShape::Square,
            ShapeArg::Circle => CloudShape::Circle,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute one hull and write it next to a provenance sidecar
    Run {
        #[arg(long, value_enum)]
        algo: AlgoArg,
        input: PathBuf,
        /// Defaults to output_brute.txt / output_graham.txt
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also render points and hull as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
        #[arg(long)]
        no_provenance: bool,
    },
    /// Run both algorithms on one input and check they agree
    Compare { input: PathBuf },
    /// Write a random point set in the input format
    Gen {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, value_enum, default_value = "disk")]
        shape: ShapeArg,
        #[arg(long, default_value_t = 100.0)]
        radius: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Snap coordinates to this grid step
        #[arg(long)]
        snap: Option<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

struct RunArgs {
    algo: Algorithm,
    input: PathBuf,
    out: PathBuf,
    svg: Option<PathBuf>,
    provenance: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let default_level = if cmd.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .init();

    match cmd.action {
        Action::Run {
            algo,
            input,
            out,
            svg,
            no_provenance,
        } => {
            let algo = Algorithm::from(algo);
            let args = RunArgs {
                algo,
                out: out.unwrap_or_else(|| PathBuf::from(algo.default_output())),
                input,
                svg,
                provenance: !no_provenance,
            };
            run(&args).map(|_| ())
        }
        Action::Compare { input } => compare(&input),
        Action::Gen {
            count,
            shape,
            radius,
            seed,
            index,
            snap,
            out,
        } => {
            let cfg = PointCloudCfg {
                count,
                shape: shape.into(),
                radius,
                snap,
            };
            generate(cfg, ReplayToken { seed, index }, &out)
        }
        Action::Report => report(),
    }
}

fn load(input: &Path) -> Result<Vec<Point>> {
    read_points(input).with_context(|| format!("reading points from {}", input.display()))
}

/// Returns `None` when the input admits no hull (reported, not an error).
fn run(args: &RunArgs) -> Result<Option<Hull>> {
    let points = load(&args.input)?;
    let start = Instant::now();
    let result = args.algo.build(&points);
    let elapsed = start.elapsed().as_secs_f64();
    println!("Running Time: {:.6}", elapsed);

    let hull = match result {
        Ok(hull) => hull,
        Err(e) if e.is_impossible() => {
            tracing::warn!(algo = args.algo.name(), n = points.len(), reason = %e, "no hull");
            println!("Convex Hull not possible: {}", e);
            return Ok(None);
        }
        Err(e) => return Err(e).context("building hull"),
    };
    tracing::info!(
        algo = args.algo.name(),
        input = %args.input.display(),
        n = points.len(),
        hull = hull.len(),
        elapsed,
        "run"
    );
    println!("Convex Hull: ");
    let listing: Vec<String> = hull
        .vertices()
        .iter()
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect();
    println!("[{}]", listing.join(", "));

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_hull(&args.out, &hull).with_context(|| format!("writing {}", args.out.display()))?;
    if let Some(svg) = &args.svg {
        let title = match args.algo {
            Algorithm::BruteForce => "Slow Convex Hull",
            Algorithm::MonotoneChain => "Graham Scan",
        };
        export_svg(svg, &points, Some(&hull), title)
            .with_context(|| format!("writing {}", svg.display()))?;
    }
    if args.provenance {
        let record = RunRecord::new(args.algo, &args.input, points.len(), &hull, elapsed);
        write_sidecar(&args.out, &record)?;
    }
    Ok(Some(hull))
}

fn compare(input: &Path) -> Result<()> {
    let points = load(input)?;
    let mut hulls = Vec::with_capacity(Algorithm::ALL.len());
    for algo in Algorithm::ALL {
        let start = Instant::now();
        let result = algo.build(&points);
        let elapsed = start.elapsed().as_secs_f64();
        println!("{}: Running Time: {:.6}", algo.name(), elapsed);
        tracing::info!(algo = algo.name(), n = points.len(), elapsed, "compare");
        hulls.push(result);
    }
    match (&hulls[0], &hulls[1]) {
        (Ok(a), Ok(b)) if a.same_polygon(b) => {
            println!("agree: {} vertices", a.len());
            Ok(())
        }
        (Ok(a), Ok(b)) => bail!(
            "hulls differ: brute has {} vertices, graham has {}",
            a.len(),
            b.len()
        ),
        (Err(a), Err(b)) if a.is_impossible() && b.is_impossible() => {
            println!("Convex Hull not possible: {}", a);
            Ok(())
        }
        (a, b) => bail!("outcomes differ: {:?} vs {:?}", a, b),
    }
}

fn generate(cfg: PointCloudCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    let points = draw_points(cfg, tok);
    tracing::info!(count = points.len(), out = %out.display(), "generate");
    write_points(out, &points).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": hull2d::VERSION,
        "algorithms": Algorithm::ALL.iter().map(|a| a.name()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
