//! Print a subject polygon after each step of one full round.
//!
//! Usage:
//!   cargo run -p stepclip --example step_through -- [seed]

use stepclip::format::{format_area, format_points};
use stepclip::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
use stepclip::{ClipCfg, ClipSession, Vec2};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let center = Vec2::new(400.0, 300.0);
    let clip_cfg = RadialCfg {
        base_radius: 200.0,
        center,
        ..RadialCfg::default()
    };
    let subject_cfg = RadialCfg {
        base_radius: 150.0,
        center: center + Vec2::new(120.0, 60.0),
        ..RadialCfg::default()
    };
    let (Some(clip), Some(subject)) = (
        draw_polygon_radial(clip_cfg, ReplayToken { seed, index: 0 }),
        draw_polygon_radial(subject_cfg, ReplayToken { seed, index: 1 }),
    ) else {
        eprintln!("sampler produced a degenerate polygon for seed {seed}");
        return;
    };
    let mut s = ClipSession::from_polygons(subject, clip, ClipCfg::default().with_viewport(800.0, 600.0));
    println!("clip    area={} {}", format_area(s.clip().signed_area()), format_points(s.clip().points()));
    println!("subject area={} {}", format_area(s.subject().signed_area()), format_points(s.subject().points()));
    for _ in 0..s.clip().len() {
        let Some(report) = s.step() else {
            println!("idle");
            break;
        };
        let (k, outside, added) = (
            report.edge_index,
            report.splices.len(),
            report.replacements().count(),
        );
        println!(
            "edge {k}: outside={outside} inserted={added} area={} {}",
            format_area(s.subject().signed_area()),
            format_points(s.subject().points())
        );
    }
}
