//! Criterion benchmarks for the path generators.
//!
//! Generation runs before every motion, on the caller's thread, so it must stay
//! negligible next to the per-point movement duration.
//!
//! Run with:
//! ```bash
//! cargo bench --package mousepath-core --bench patterns_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mousepath_core::patterns::{circle, heart, random_walk, spiral, star};
use mousepath_core::Point;
use rand::rngs::StdRng;
use rand::SeedableRng;

const CENTER: Point = Point::new(960, 540);

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");
    for steps in [50u32, 500, 5_000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| circle(black_box(CENTER), black_box(150), steps, true))
        });
    }
    group.finish();
}

fn bench_spiral(c: &mut Criterion) {
    c.bench_function("spiral_3_turns_50_steps", |b| {
        b.iter(|| spiral(black_box(CENTER), black_box(200), 3, 50))
    });
}

fn bench_star_and_heart(c: &mut Criterion) {
    c.bench_function("star_5_points", |b| {
        b.iter(|| star(black_box(CENTER), 150, 75, black_box(5)))
    });
    c.bench_function("heart_100_steps", |b| {
        b.iter(|| heart(black_box(CENTER), 10, black_box(100)))
    });
}

fn bench_random_walk(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("random_walk_1000_steps", |b| {
        b.iter(|| random_walk(black_box(CENTER), 1_000, 50, &mut rng))
    });
}

criterion_group!(
    benches,
    bench_circle,
    bench_spiral,
    bench_star_and_heart,
    bench_random_walk
);
criterion_main!(benches);
