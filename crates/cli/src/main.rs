use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use stepclip::format::{format_area, format_points};
use stepclip::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use stepclip::{ClipCfg, ClipSession, Region, Vec2};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod scenario;
mod trace;

use provenance::{write_sidecar, Payload};
use scenario::{ensure_parent, Scenario};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Step-wise polygon clipping runner")]
struct Cmd {
    #[command(flatten)]
    clip: ClipArgs,

    /// Log level for stderr output
    #[arg(long, global = true, default_value = "info")]
    log: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

/// Tolerances and valid region; defaults match `ClipCfg::default()`.
#[derive(Args, Clone, Debug)]
struct ClipArgs {
    /// Near-parallel rejection threshold for line intersection
    #[arg(long, global = true, default_value_t = 1e-4)]
    eps: f64,
    /// Taxicab distance below which candidates count as duplicates
    #[arg(long, global = true, default_value_t = 10.0)]
    dup_threshold: f64,
    /// Valid region [0,W]x[0,H]; overrides the scenario's viewport
    #[arg(long, global = true, num_args = 2, value_names = ["W", "H"])]
    viewport: Option<Vec<f64>>,
}

impl ClipArgs {
    fn cfg(&self, scenario_viewport: Option<[f64; 2]>) -> Result<ClipCfg> {
        if !(self.eps >= 0.0) || !(self.dup_threshold >= 0.0) {
            bail!("--eps and --dup-threshold must be non-negative");
        }
        let viewport = match self.viewport.as_deref() {
            Some(&[w, h]) => Some([w, h]),
            Some(other) => bail!("--viewport takes two values, got {}", other.len()),
            None => scenario_viewport,
        };
        let region = match viewport {
            Some([w, h]) if w > 0.0 && h > 0.0 => Region::viewport(w, h),
            Some([w, h]) => bail!("viewport must be positive, got {w} x {h}"),
            None => Region::unbounded(),
        };
        Ok(ClipCfg {
            eps_parallel: self.eps,
            dup_threshold: self.dup_threshold,
            region,
        })
    }
}

#[derive(Subcommand)]
enum Action {
    /// Replay clip steps and write a JSON trace (plus provenance sidecar)
    Step {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Number of steps to run
        #[arg(long, default_value_t = 1, conflicts_with = "round")]
        steps: usize,
        /// Run one step per clip edge
        #[arg(long)]
        round: bool,
    },
    /// Write the scenario with both polygons normalized to non-negative area
    Normalize {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print signed areas and vertex lists
    Report {
        #[arg(long)]
        input: PathBuf,
    },
    /// Write a random convex subject/clip scenario
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Step {
            input,
            out,
            steps,
            round,
        } => step(&cmd.clip, &input, &out, steps, round),
        Action::Normalize { input, out } => normalize(&input, &out),
        Action::Report { input } => report(&input),
        Action::Random {
            seed,
            out,
            width,
            height,
        } => random(seed, &out, width, height),
    }
}

fn step(args: &ClipArgs, input: &Path, out: &Path, steps: usize, round: bool) -> Result<()> {
    let scenario = Scenario::load(input)?;
    let cfg = args.cfg(scenario.viewport)?;
    let mut session =
        ClipSession::from_polygons(scenario.subject_polygon(), scenario.clip_polygon(), cfg);
    let steps = if round { session.clip().len() } else { steps };
    tracing::info!(input = %input.display(), out = %out.display(), steps, "step");

    let trace = trace::replay(&mut session, steps);
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&trace)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        out,
        Payload::new(
            "step",
            serde_json::json!({
                "input": input.to_string_lossy(),
                "steps": steps,
                "eps": cfg.eps_parallel,
                "dup_threshold": cfg.dup_threshold,
                "viewport": args.viewport.clone().or(scenario.viewport.map(|v| v.to_vec())),
            }),
        ),
    )?;
    Ok(())
}

fn normalize(input: &Path, out: &Path) -> Result<()> {
    let scenario = Scenario::load(input)?;
    let mut subject = scenario.subject_polygon();
    let mut clip = scenario.clip_polygon();
    let reversed = (subject.normalize(), clip.normalize());
    tracing::info!(
        subject_reversed = reversed.0,
        clip_reversed = reversed.1,
        "normalize"
    );
    Scenario::from_polygons(&subject, &clip, scenario.viewport).save(out)
}

fn report(input: &Path) -> Result<()> {
    let scenario = Scenario::load(input)?;
    for (name, poly) in [
        ("subject", scenario.subject_polygon()),
        ("clip", scenario.clip_polygon()),
    ] {
        println!("{name} area: {}", format_area(poly.signed_area()));
        println!("{name} points: {}", format_points(poly.points()));
    }
    Ok(())
}

fn random(seed: u64, out: &Path, width: f64, height: f64) -> Result<()> {
    if !(width > 0.0 && height > 0.0) {
        bail!("width and height must be positive");
    }
    let r = 0.35 * width.min(height);
    let center = Vec2::new(width / 2.0, height / 2.0);
    let clip_cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 4, max: 8 },
        base_radius: r,
        center,
        ..RadialCfg::default()
    };
    let subject_cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 12 },
        base_radius: 0.8 * r,
        center: center + Vec2::new(0.4 * r, 0.25 * r),
        ..RadialCfg::default()
    };
    let (Some(clip), Some(subject)) = (
        draw_polygon_radial(clip_cfg, ReplayToken { seed, index: 0 }),
        draw_polygon_radial(subject_cfg, ReplayToken { seed, index: 1 }),
    ) else {
        bail!("sampler produced a degenerate polygon for seed {seed}");
    };
    tracing::info!(seed, subject = subject.len(), clip = clip.len(), "random");
    Scenario::from_polygons(&subject, &clip, Some([width, height])).save(out)?;
    write_sidecar(
        out,
        Payload::new(
            "random",
            serde_json::json!({ "seed": seed, "width": width, "height": height }),
        ),
    )?;
    Ok(())
}
