// src/indices/ndvi.rs
use ndarray::{Array, ArrayBase, Data, Dimension, ScalarOperand};
use num_traits::Float;

/// Normalized Difference Vegetation Index for a set of band arrays.
///
/// `NDVI = (NIR - RED) / (NIR + RED)`
///
/// Values fall in `[-1, 1]` for reflectance inputs. Positions where
/// `NIR + RED == 0` come out as `inf` or `NaN`.
///
/// # Panics
/// If the band shapes cannot be broadcast together.
pub fn ndvi<A, S1, S2, D>(red: &ArrayBase<S1, D>, nir: &ArrayBase<S2, D>) -> Array<A, D>
where
    A: Float + ScalarOperand,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    (nir - red) / &(nir + red)
}

#[inline]
pub fn ndvi_pixel<A: Float>(red: A, nir: A) -> A {
    (nir - red) / (nir + red)
}
