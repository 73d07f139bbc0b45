// src/indices/evi.rs
use ndarray::{Array, ArrayBase, Data, Dimension, ScalarOperand};
use super::{coefficient, Reflectance};

// EVI coefficients from MODIS documentation
pub const GAIN: f32 = 2.5; // Gain factor
pub const C1: f32 = 6.0; // Aerosol resistance (red)
pub const C2: f32 = 7.5; // Aerosol resistance (blue)
pub const L: f32 = 1.0; // Canopy background adjustment

/// Enhanced Vegetation Index for a set of band arrays.
///
/// `EVI = 2.5 * (NIR - RED) / (NIR + 6 * RED - 7.5 * BLUE + 1)`
///
/// Bands must be floating point reflectance in `[0, 1]`. The result is a new
/// array with the broadcast shape of the inputs.
///
/// # Panics
/// If the band shapes cannot be broadcast together.
pub fn evi<A, S1, S2, S3, D>(
    red: &ArrayBase<S1, D>,
    nir: &ArrayBase<S2, D>,
    blue: &ArrayBase<S3, D>,
) -> Array<A, D>
where
    A: Reflectance + ScalarOperand,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    D: Dimension,
{
    let gain: A = coefficient(GAIN);
    let c1: A = coefficient(C1);
    let c2: A = coefficient(C2);
    let l: A = coefficient(L);

    let numerator = (nir - red) * gain;
    let denominator = (nir + &(red * c1)) - &(blue * c2) + l;

    numerator / &denominator
}

/// EVI for a single pixel. Evaluates in the same order as [`evi`], so both
/// give identical bits for the same inputs.
#[inline]
pub fn evi_pixel<A: Reflectance>(red: A, nir: A, blue: A) -> A {
    let gain: A = coefficient(GAIN);
    let c1: A = coefficient(C1);
    let c2: A = coefficient(C2);
    let l: A = coefficient(L);

    ((nir - red) * gain) / (nir + red * c1 - blue * c2 + l)
}
