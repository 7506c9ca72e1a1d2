//! Core

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod reflection;
pub mod rng;
pub mod sampler;
pub mod sampling;
pub mod spectrum;
