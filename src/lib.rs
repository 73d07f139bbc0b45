// src/lib.rs
pub mod indices;
pub mod processing;

pub use indices::{evi, evi_pixel, ndvi, ndvi_pixel, Reflectance};

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
