// Copyright 2026 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the axis tree on gesture-shaped workloads: a burst of
//! inserts at drag start, then a stream of nearest queries per pointer move.

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use snapline_index::AxisTree;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Edge coordinates for `n` elements laid out over a 4096-unit canvas,
/// rounded to one decimal the way the gesture layer does.
fn gen_edges(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(n * 2);
    for _ in 0..n {
        let left = (rng.next_f64() * 4096.0 * 10.0).round() / 10.0;
        let width = (rng.next_f64() * 400.0 * 10.0).round() / 10.0;
        out.push(left);
        out.push(left + width);
    }
    out
}

fn build_tree(edges: &[f64]) -> AxisTree<u32> {
    let mut tree = AxisTree::seeded();
    for (i, &edge) in edges.iter().enumerate() {
        tree.insert(edge, (i / 2) as u32);
    }
    tree
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [64_usize, 512, 4096] {
        let edges = gen_edges(n, 0xA11CE);
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_function(format!("elements_{n}"), |b| {
            b.iter(|| black_box(build_tree(&edges)));
        });
    }
    group.finish();
}

fn bench_nearest_localized(c: &mut Criterion) {
    // A drag lingers in one region: consecutive queries are close together,
    // which is exactly the access pattern splaying rewards.
    let edges = gen_edges(4096, 0xBEEF);
    let mut group = c.benchmark_group("nearest_localized");
    group.throughput(Throughput::Elements(256));
    group.bench_function("elements_4096", |b| {
        b.iter_batched_ref(
            || build_tree(&edges),
            |tree| {
                let mut q = 2048.0;
                for step in 0..256 {
                    q += if step % 2 == 0 { 1.5 } else { -0.5 };
                    black_box(tree.nearest(q));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_nearest_scattered(c: &mut Criterion) {
    let edges = gen_edges(4096, 0xBEEF);
    let mut group = c.benchmark_group("nearest_scattered");
    group.throughput(Throughput::Elements(256));
    group.bench_function("elements_4096", |b| {
        b.iter_batched_ref(
            || (build_tree(&edges), Rng::new(0xD1CE)),
            |(tree, rng)| {
                for _ in 0..256 {
                    let q = rng.next_f64() * 4096.0;
                    black_box(tree.nearest(q));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    // Insert/remove cycles over a shared key range, stressing bucket updates
    // and structural deletion.
    let edges = gen_edges(512, 0xFEED);
    let mut group = c.benchmark_group("churn");
    group.throughput(Throughput::Elements(512));
    group.bench_function("insert_remove_512", |b| {
        b.iter_batched_ref(
            || build_tree(&edges),
            |tree| {
                for (i, &edge) in edges.iter().enumerate().take(512) {
                    tree.insert(edge, 9000 + i as u32);
                    tree.remove(edge, &(9000 + i as u32));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_nearest_localized,
    bench_nearest_scattered,
    bench_churn
);
criterion_main!(benches);
