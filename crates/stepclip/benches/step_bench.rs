//! Criterion benchmarks for single steps and full rounds.
//! Focus sizes: subject vertex counts n in {8, 64, 512}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use stepclip::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use stepclip::{ClipCfg, ClipSession, Polygon};

fn polygon(n: usize, base_radius: f64, center: Vector2<f64>, seed: u64) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        radial_jitter: 0.0,
        base_radius,
        center,
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed, index: 0 }).unwrap_or_default()
}

fn session(n: usize) -> ClipSession {
    let center = Vector2::new(500.0, 500.0);
    let subject = polygon(n, 300.0, center + Vector2::new(150.0, 0.0), 43);
    let clip = polygon(12, 300.0, center, 44);
    ClipSession::from_polygons(subject, clip, ClipCfg::default().with_viewport(1000.0, 1000.0))
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");
    for &n in &[8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("step", n), &n, |b, &n| {
            b.iter_batched(
                || session(n),
                |mut s| {
                    let _report = s.step().map(|r| r.subject_len_after);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("run_round", n), &n, |b, &n| {
            b.iter_batched(
                || session(n),
                |mut s| {
                    let _taken = s.run_round();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
