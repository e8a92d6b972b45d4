//! Criterion benchmarks: exhaustive edge test vs monotone chain.
//! Brute force is O(n³), so its sizes stop early.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2d::rand::{draw_points, CloudShape, PointCloudCfg, ReplayToken};
use hull2d::{brute_force_hull, monotone_chain_hull, Point};

fn cloud(n: usize, shape: CloudShape, seed: u64) -> Vec<Point> {
    let cfg = PointCloudCfg {
        count: n,
        shape,
        radius: 100.0,
        snap: None,
    };
    draw_points(cfg, ReplayToken { seed, index: 0 })
}

fn bench_hulls(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull2d");
    for &n in &[10usize, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::new("brute_force_disk", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, CloudShape::Disk, 43),
                |pts| {
                    let _h = brute_force_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    for &n in &[10usize, 100, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("monotone_chain_disk", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, CloudShape::Disk, 44),
                |pts| {
                    let _h = monotone_chain_hull(&pts).unwrap();
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(
            BenchmarkId::new("monotone_chain_circle", n),
            &n,
            |b, &n| {
                b.iter_batched(
                    || cloud(n, CloudShape::Circle, 45),
                    |pts| {
                        let _h = monotone_chain_hull(&pts).unwrap();
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_hulls);
criterion_main!(benches);
