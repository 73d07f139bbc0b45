use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use vegetation_indices::processing::indices::{Evi, Ndvi};
use vegetation_indices::processing::ParallelProcessor;
use vegetation_indices::{evi, ndvi};

fn synthetic_bands(size: (usize, usize)) -> (Array2<f32>, Array2<f32>, Array2<f32>) {
    // Simulated reflectance for RED, NIR and BLUE
    let red = Array2::from_shape_fn(size, |(r, c)| 0.05 + ((r * size.1 + c) % 50) as f32 / 500.0);
    let nir = Array2::from_shape_fn(size, |(r, c)| 0.3 + ((r * size.1 + c) % 100) as f32 / 250.0);
    let blue = Array2::from_shape_fn(size, |(r, c)| 0.02 + ((r * size.1 + c) % 25) as f32 / 1000.0);
    (red, nir, blue)
}

/// Benchmark the array functions in isolation
fn benchmark_array_indices(c: &mut Criterion) {
    let (red, nir, blue) = synthetic_bands((1024, 1024));

    c.bench_function("ndvi_array", |b| b.iter(|| ndvi(black_box(&red), black_box(&nir))));
    c.bench_function("evi_array", |b| {
        b.iter(|| evi(black_box(&red), black_box(&nir), black_box(&blue)))
    });
}

/// Benchmark the per-pixel calculators on the thread pool
fn benchmark_parallel_processor(c: &mut Criterion) {
    let (red, nir, blue) = synthetic_bands((1024, 1024));
    let processor = ParallelProcessor::new(None).expect("thread pool");
    let ndvi_calc = Ndvi::new(0, 1, None);
    let evi_calc = Evi::new(0, 1, 2, None);

    c.bench_function("ndvi_processor", |b| {
        b.iter(|| processor.process(&ndvi_calc, black_box(&[red.view(), nir.view()])))
    });
    c.bench_function("evi_processor", |b| {
        b.iter(|| processor.process(&evi_calc, black_box(&[red.view(), nir.view(), blue.view()])))
    });
}

criterion_group!(benches, benchmark_array_indices, benchmark_parallel_processor);
criterion_main!(benches);
