// src/processing/indices/mod.rs
pub mod evi;
pub mod ndvi;

// Re-export indices
pub use evi::Evi;
pub use ndvi::Ndvi;
