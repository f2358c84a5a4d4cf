//! Random-features approximation benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Width scaling (single layer, 10 to 2048 features)
//! - Deep stacks (1 to 10 layers)
//! - Activations (tanh, relu, sigmoid)
//! - Stages in isolation (feature sampling, transform, ridge solve)
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rfa_rs::prelude::*;
use std::hint::black_box;

// ============================================================================
// Helpers
// ============================================================================

fn model(target: Target, activation: Activation, widths: &[i64]) -> Approximator {
    let builder = RandomFeatures::new().target(target).activation(activation);
    let builder = match widths {
        [w] => builder.width(*w),
        _ => builder.layers(widths),
    };
    builder.seed(42).build().unwrap()
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("width");
    group.sample_size(20);

    for width in [10_i64, 50, 200, 512, 2048] {
        group.throughput(Throughput::Elements(width as u64));
        let approx = model(Target::Sine, Activation::Tanh, &[width]);

        group.bench_with_input(BenchmarkId::new("run", width), &width, |b, _| {
            b.iter(|| black_box(&approx).run().unwrap())
        });
    }
    group.finish();
}

fn bench_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth");
    group.sample_size(20);

    for depth in [1_usize, 2, 4, 10] {
        let widths = vec![64_i64; depth];
        let approx = model(Target::Cubic, Activation::Relu, &widths);

        group.bench_with_input(BenchmarkId::new("run", depth), &depth, |b, _| {
            b.iter(|| black_box(&approx).run().unwrap())
        });
    }
    group.finish();
}

fn bench_activations(c: &mut Criterion) {
    let mut group = c.benchmark_group("activations");
    group.sample_size(50);

    for activation in Activation::ALL {
        let approx = model(Target::Abs, activation, &[100]);

        group.bench_with_input(
            BenchmarkId::new("run", activation.key()),
            &activation,
            |b, _| b.iter(|| black_box(&approx).run().unwrap()),
        );
    }
    group.finish();
}

// ============================================================================
// Stage Benchmarks
// ============================================================================

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    group.sample_size(50);

    let width = 256;
    let shape = FeatureShape::Single(width);
    let train = SampleSet::on_grid(Executor::TRAIN_POINTS, |x| Target::Sine.eval_slice(x));

    group.bench_function("sample_features", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            FeatureMap::sample(black_box(&shape), Activation::Tanh, &mut rng).unwrap()
        })
    });

    let mut rng = StdRng::seed_from_u64(7);
    let map = FeatureMap::sample(&shape, Activation::Tanh, &mut rng).unwrap();

    group.bench_function("transform", |b| {
        b.iter(|| map.transform(black_box(train.x())))
    });

    let phi = map.transform(train.x());
    let ridge = RidgeRegression::new(1e-3).unwrap();

    group.bench_function("ridge_fit", |b| {
        b.iter(|| ridge.fit(black_box(&phi), black_box(train.y())).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_width,
    bench_depth,
    bench_activations,
    bench_stages,
);

criterion_main!(benches);
