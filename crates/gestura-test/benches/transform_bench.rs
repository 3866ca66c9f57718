//! Benchmarks for GESTURA transform accumulation and the full pipeline

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gestura_core::{GestureState, Vec2};
use gestura_runtime::GesturePipeline;
use gestura_test::{HandPose, SyntheticHand};
use gestura_transform::TransformAccumulator;

fn bench_accumulate_grip(c: &mut Criterion) {
    let mut accumulator = TransformAccumulator::new();
    let state = GestureState::grip(Vec2::new(0.01, -0.005));

    c.bench_function("accumulate_grip", |b| {
        b.iter(|| black_box(accumulator.update(black_box(&state))))
    });
}

fn bench_accumulate_zoom_elapsed(c: &mut Criterion) {
    let mut accumulator = TransformAccumulator::new();
    let state = GestureState::pinch_zoom(1.001);
    let dt = Duration::from_micros(16_667);

    c.bench_function("accumulate_zoom_elapsed", |b| {
        b.iter(|| black_box(accumulator.update_elapsed(black_box(&state), dt)))
    });
}

fn bench_pipeline_step(c: &mut Criterion) {
    let mut pipeline = GesturePipeline::new();
    let frames = [
        SyntheticHand::new(HandPose::Fist, Vec2::new(0.50, 0.6)).frame(),
        SyntheticHand::new(HandPose::Fist, Vec2::new(0.51, 0.6)).frame(),
    ];
    let dt = Duration::from_micros(33_333);

    c.bench_function("pipeline_step", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i = i.wrapping_add(1);
            black_box(pipeline.step(&frames[i % 2], dt))
        })
    });
}

criterion_group!(
    benches,
    bench_accumulate_grip,
    bench_accumulate_zoom_elapsed,
    bench_pipeline_step,
);
criterion_main!(benches);
