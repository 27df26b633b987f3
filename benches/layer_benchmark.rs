#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for layer operations (fill, blend, composite, transforms).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use layer_raster::prelude::*;
use std::hint::black_box;

fn gradient_layer(width: u32, height: u32) -> Layer {
    let mut layer = Layer::new(width, height).expect("layer creation should succeed");
    for y in 0..height {
        for x in 0..width {
            let r = f64::from(x) / f64::from(width);
            let g = f64::from(y) / f64::from(height);
            layer.set_pixel(Point::new(x as i32, y as i32), Rgba::new(r, g, 0.5, 0.75));
        }
    }
    layer
}

fn layer_fill_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_fill");

    for (width, height) in [(320, 240), (800, 600), (1920, 1080)] {
        let mut layer = Layer::new(width, height).expect("layer creation should succeed");

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    layer.fill(black_box(Rgba::RED));
                });
            },
        );
    }

    group.finish();
}

fn layer_blend_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_blend");

    let mut layer = Layer::new(800, 600).expect("layer creation should succeed");
    layer.fill(Rgba::WHITE);

    let semi_transparent = Rgba::RED.with_alpha(0.5);

    group.bench_function("blend_pixel_800x600", |b| {
        b.iter(|| {
            for y in 0..600 {
                for x in 0..800 {
                    layer.blend_pixel(black_box(Point::new(x, y)), semi_transparent);
                }
            }
        });
    });

    group.finish();
}

fn composite_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");

    let src = gradient_layer(400, 300);
    let mut dst = Layer::new(800, 600).expect("layer creation should succeed");

    group.bench_function("over_400x300_onto_800x600", |b| {
        b.iter(|| composite(&mut dst, black_box(&src), Point::new(200, 150)));
    });

    group.bench_function("replace_400x300_onto_800x600", |b| {
        b.iter(|| composite_with(&mut dst, black_box(&src), Point::new(-100, 400), &Replace));
    });

    group.finish();
}

fn transform_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    let src = gradient_layer(640, 480);

    group.bench_function("resize_nearest_2x", |b| {
        b.iter(|| {
            src.resize_nearest_to(black_box(Size::new(1280, 960)))
                .expect("resize should succeed")
        });
    });

    group.bench_function("resize_bilinear_2x", |b| {
        b.iter(|| {
            src.resize_bilinear_to(black_box(Size::new(1280, 960)))
                .expect("resize should succeed")
        });
    });

    group.bench_function("downsample_2x", |b| {
        b.iter(|| black_box(&src).downsample_2x_to().expect("downsample should succeed"));
    });

    group.bench_function("flip_horizontal_in_place", |b| {
        let mut layer = src.clone();
        b.iter(|| layer.flip_horizontal());
    });

    group.finish();
}

criterion_group!(
    benches,
    layer_fill_benchmark,
    layer_blend_benchmark,
    composite_benchmark,
    transform_benchmark
);
criterion_main!(benches);
