// src/indices/mod.rs
//! Vegetation indices over whole band arrays.
//!
//! Bands are reflectance in `[0, 1]`. Nothing here checks the range or the
//! shapes; mismatched shapes fail inside ndarray's broadcasting, and a zero
//! denominator gives `inf`/`NaN` the way plain float division does.

pub mod evi;
pub mod ndvi;

use num_traits::Float;

pub use evi::{evi, evi_pixel};
pub use ndvi::{ndvi, ndvi_pixel};

/// Band element type. Formula constants are `f32` literals, so every
/// supported type holds them exactly.
pub trait Reflectance: Float + From<f32> {}

impl<T: Float + From<f32>> Reflectance for T {}

#[inline]
pub(crate) fn coefficient<A: Reflectance>(value: f32) -> A {
    <A as From<f32>>::from(value)
}
