// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Performance benchmarks

use boxscope::geometry::{build_edges, compute_corners, OrientedBox};
use boxscope::render::{FrameRenderer, RecordingBackend};
use boxscope::VisualizerConfig;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    group.bench_function("compute_corners", |b| {
        b.iter(|| {
            compute_corners(
                black_box(5.0),
                black_box(7.0),
                black_box(4.0),
                black_box(4.0),
                black_box(2.0),
                black_box(-0.785),
            )
            .unwrap()
        });
    });

    let corners = compute_corners(5.0, 7.0, 4.0, 4.0, 2.0, -0.785).unwrap();
    group.bench_function("build_edges", |b| {
        b.iter(|| build_edges(black_box(&corners)));
    });

    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("frames");
    let config = VisualizerConfig::default();
    let renderer = FrameRenderer::new(&config);

    for count in [1usize, 10, 100] {
        let objects: Vec<OrientedBox> = (0..count)
            .map(|i| {
                let t = i as f64;
                OrientedBox::new(t.cos() * 15.0, t.sin() * 15.0, 4.5, 1.8, 1.5, t * 0.3, "Car")
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("plan", count), &objects, |b, objects| {
            b.iter(|| renderer.plan_frame(black_box(objects)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("record", count), &objects, |b, objects| {
            b.iter(|| {
                let mut backend = RecordingBackend::new();
                renderer.render_frame(black_box(objects), &mut backend).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_frames);
criterion_main!(benches);
