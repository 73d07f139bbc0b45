// src/processing/mod.rs
pub mod indices;
pub mod parallel;

// Re-export main components
pub use parallel::{IndexCalculator, ParallelProcessor};
