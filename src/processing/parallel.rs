// src/processing/parallel.rs
use std::num::NonZero;

use anyhow::{bail, Context, Result};
use ndarray::{Array, ArrayView, CowArray, Dimension};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::indices::Reflectance;

/// Rasters up to this many pixels skip the pool and run on the calling thread.
const SMALL_RASTER_PIXELS: usize = 512 * 512;

/// A per-pixel index over a fixed set of input bands.
pub trait IndexCalculator: Send + Sync {
    /// Evaluate the index at one position; `pixel[i]` is input band `i` there.
    fn calculate<A: Reflectance>(&self, pixel: &[A]) -> A;

    fn required_bands(&self) -> usize;

    /// Input band positions read by [`IndexCalculator::calculate`].
    fn band_indices(&self) -> &[usize];

    fn name(&self) -> &str;
}

/// Runs an [`IndexCalculator`] over in-memory bands on a dedicated rayon pool.
pub struct ParallelProcessor {
    threads: usize,
    pool: ThreadPool,
}

impl ParallelProcessor {
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let threads = threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(NonZero::get)
                .unwrap_or(4)
        });

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("vegetation-indices-{i}"))
            .build()
            .context("Failed to build processing thread pool")?;

        debug!(threads, "created parallel processor");

        Ok(Self { threads, pool })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Evaluate `calculator` at every position of `inputs`.
    ///
    /// Unlike the array functions in [`crate::indices`], this path checks its
    /// inputs: every band must have the same shape, and the calculator's band
    /// indices must be in range. No broadcasting is done.
    pub fn process<A, D, I>(&self, calculator: &I, inputs: &[ArrayView<'_, A, D>]) -> Result<Array<A, D>>
    where
        A: Reflectance + Send + Sync,
        D: Dimension,
        I: IndexCalculator,
    {
        if inputs.len() < calculator.required_bands() {
            bail!(
                "Not enough input bands provided for {}. Required: {}, provided: {}",
                calculator.name(),
                calculator.required_bands(),
                inputs.len()
            );
        }

        if let Some(&index) = calculator.band_indices().iter().find(|&&i| i >= inputs.len()) {
            bail!(
                "{} reads band {} but only {} bands were provided",
                calculator.name(),
                index,
                inputs.len()
            );
        }

        let first = inputs.first().context("No input bands provided")?;
        let shape = first.raw_dim();
        if let Some((i, band)) = inputs.iter().enumerate().find(|(_, band)| band.raw_dim() != shape) {
            bail!(
                "Band {} has shape {:?}, expected {:?}",
                i,
                band.shape(),
                first.shape()
            );
        }

        // Logical (row-major) order, so flat positions line up across bands
        let bands: Vec<CowArray<'_, A, D>> = inputs.iter().map(|band| band.as_standard_layout()).collect();
        let slices = bands
            .iter()
            .map(|band| band.as_slice().context("Band is not contiguous after relayout"))
            .collect::<Result<Vec<&[A]>>>()?;

        let len = shape.size();
        let sequential = len <= SMALL_RASTER_PIXELS;

        debug!(
            index = calculator.name(),
            bands = inputs.len(),
            shape = ?first.shape(),
            sequential,
            "processing index"
        );

        let data: Vec<A> = if sequential {
            let mut pixel = Vec::with_capacity(slices.len());
            (0..len)
                .map(|i| {
                    gather(&mut pixel, &slices, i);
                    calculator.calculate(pixel.as_slice())
                })
                .collect()
        } else {
            self.pool.install(|| {
                (0..len)
                    .into_par_iter()
                    .map_init(
                        || Vec::with_capacity(slices.len()),
                        |pixel, i| {
                            gather(pixel, &slices, i);
                            calculator.calculate(pixel.as_slice())
                        },
                    )
                    .collect()
            })
        };

        Array::from_shape_vec(shape, data).context("Result does not match the input shape")
    }
}

#[inline]
fn gather<A: Copy>(pixel: &mut Vec<A>, bands: &[&[A]], i: usize) {
    pixel.clear();
    pixel.extend(bands.iter().map(|band| band[i]));
}
