#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for primitive rasterization (hard-edge and antialiased).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use layer_raster::prelude::*;
use std::hint::black_box;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    let mut layer = Layer::new(800, 600).expect("layer creation should succeed");

    for thickness in [1, 3, 8] {
        group.bench_with_input(
            BenchmarkId::new("bresenham", thickness),
            &thickness,
            |b, &thickness| {
                b.iter(|| {
                    draw_line(
                        &mut layer,
                        black_box(Point::new(10, 20)),
                        black_box(Point::new(790, 580)),
                        thickness,
                        Rgba::BLACK,
                    );
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("antialiased", thickness), &thickness, |b, &thickness| {
            b.iter(|| {
                draw_line_aa(
                    &mut layer,
                    black_box(Point::new(10, 20)),
                    black_box(Point::new(790, 580)),
                    thickness,
                    Rgba::BLACK,
                );
            });
        });
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");
    let mut layer = Layer::new(800, 600).expect("layer creation should succeed");

    for radius in [4, 32, 200] {
        group.bench_with_input(BenchmarkId::new("filled", radius), &radius, |b, &radius| {
            b.iter(|| draw_circle(&mut layer, black_box(Point::new(400, 300)), radius, Rgba::BLUE));
        });

        group.bench_with_input(BenchmarkId::new("antialiased", radius), &radius, |b, &radius| {
            b.iter(|| draw_circle_aa(&mut layer, black_box(Point::new(400, 300)), radius, Rgba::BLUE));
        });
    }

    group.finish();
}

fn polygon_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    let mut layer = Layer::new(800, 600).expect("layer creation should succeed");

    let (a, b_, c_) = (Point::new(50, 40), Point::new(700, 120), Point::new(300, 560));
    let hexagon = [
        Point::new(300, 100),
        Point::new(500, 100),
        Point::new(600, 300),
        Point::new(500, 500),
        Point::new(300, 500),
        Point::new(200, 300),
    ];

    group.bench_function("triangle_scanline", |b| {
        b.iter(|| draw_triangle(&mut layer, black_box(a), b_, c_, Rgba::GREEN));
    });

    group.bench_function("triangle_antialiased", |b| {
        b.iter(|| draw_triangle_aa(&mut layer, black_box(a), b_, c_, Rgba::GREEN));
    });

    group.bench_function("hexagon_edge_function", |b| {
        b.iter(|| draw_polygon(&mut layer, black_box(&hexagon), Rgba::RED));
    });

    group.bench_function("hexagon_antialiased", |b| {
        b.iter(|| draw_polygon_aa(&mut layer, black_box(&hexagon), Rgba::RED));
    });

    group.finish();
}

criterion_group!(benches, line_benchmark, circle_benchmark, polygon_benchmark);
criterion_main!(benches);
