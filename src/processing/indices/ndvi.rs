// src/processing/indices/ndvi.rs
use crate::indices::{ndvi_pixel, Reflectance};
use crate::processing::parallel::IndexCalculator;

/// Normalized Difference Vegetation Index (NDVI) calculator
pub struct Ndvi {
    bands: [usize; 2],
    name: String,
}

impl Ndvi {
    pub fn new(red_index: usize, nir_index: usize, name: Option<String>) -> Self {
        Self {
            bands: [red_index, nir_index],
            name: name.unwrap_or_else(|| "NDVI".to_string()),
        }
    }
}

impl IndexCalculator for Ndvi {
    fn calculate<A: Reflectance>(&self, pixel: &[A]) -> A {
        let [red, nir] = self.bands;
        ndvi_pixel(pixel[red], pixel[nir])
    }

    fn required_bands(&self) -> usize {
        2 // RED, NIR
    }

    fn band_indices(&self) -> &[usize] {
        &self.bands
    }

    fn name(&self) -> &str {
        &self.name
    }
}
