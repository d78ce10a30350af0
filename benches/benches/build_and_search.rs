// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_rtree::{Aabb2D, BuildOrder, Config, RTree, RTreeF64};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Aabb2D::<f64>::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

fn gen_grid_rects_i64(n: usize, cell: i64) -> Vec<Aabb2D<i64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as i64 * cell;
            let y0 = y as i64 * cell;
            out.push(Aabb2D::<i64>::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

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

fn gen_random_rects(count: usize, extent: f64, rect_w: f64, rect_h: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (extent - rect_w).max(1.0);
        let y0 = rng.next_f64() * (extent - rect_h).max(1.0);
        out.push(Aabb2D::<f64>::from_xywh(x0, y0, rect_w, rect_h));
    }
    out
}

fn tiled() -> Config {
    Config {
        order: BuildOrder::Tiled,
        ..Config::default()
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_f64");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("input_order_n{}", n), |b| {
            b.iter_batched(
                RTreeF64::new,
                |mut tree| {
                    tree.build_rects(rects.iter().copied());
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("tiled_n{}", n), |b| {
            b.iter_batched(
                || RTreeF64::with_config(tiled()),
                |mut tree| {
                    tree.build_rects(rects.iter().copied());
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_search_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_grid_i64");
    for &n in &[64usize, 128] {
        let tree = RTree::from_rects(gen_grid_rects_i64(n, 10));
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("viewport_n{}", n), |b| {
            let mut out = Vec::new();
            b.iter(|| {
                out.clear();
                tree.search_into(Aabb2D::<i64>::from_xywh(100, 100, 400, 400), &mut out);
                black_box(out.len());
            })
        });
    }
    group.finish();
}

fn bench_search_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_random_f64");
    let rects = gen_random_rects(16_384, 4000.0, 12.0, 12.0);
    for (name, config) in [("input_order", Config::default()), ("tiled", tiled())] {
        let mut tree = RTreeF64::with_config(config);
        tree.build_rects(rects.iter().copied());
        group.bench_function(format!("many_small_queries_{}", name), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for q in 0..256 {
                    let x = (q % 16) as f64 * 250.0;
                    let y = (q / 16) as f64 * 250.0;
                    total += tree.search(Aabb2D::<f64>::from_xywh(x, y, 64.0, 64.0)).len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_query_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_point_f64");
    let tree = RTree::from_rects(gen_grid_rects(128, 8.0));
    group.bench_function("grid_n128", |b| {
        b.iter(|| {
            let mut total = 0_usize;
            for q in 0..4096 {
                let x = (q % 64) as f64 * 16.0 + 0.5;
                let y = (q / 64) as f64 * 16.0 + 0.5;
                total += tree.query_point(x, y).len();
            }
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_search_grid,
    bench_search_random,
    bench_query_point,
);
criterion_main!(benches);
