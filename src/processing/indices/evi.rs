// src/processing/indices/evi.rs
use crate::indices::{evi_pixel, Reflectance};
use crate::processing::parallel::IndexCalculator;

/// Enhanced Vegetation Index (EVI) calculator
pub struct Evi {
    bands: [usize; 3],
    name: String,
}

impl Evi {
    pub fn new(red_index: usize, nir_index: usize, blue_index: usize, name: Option<String>) -> Self {
        Self {
            bands: [red_index, nir_index, blue_index],
            name: name.unwrap_or_else(|| "EVI".to_string()),
        }
    }
}

impl IndexCalculator for Evi {
    fn calculate<A: Reflectance>(&self, pixel: &[A]) -> A {
        let [red, nir, blue] = self.bands;
        evi_pixel(pixel[red], pixel[nir], pixel[blue])
    }

    fn required_bands(&self) -> usize {
        3 // RED, NIR, BLUE
    }

    fn band_indices(&self) -> &[usize] {
        &self.bands
    }

    fn name(&self) -> &str {
        &self.name
    }
}
