//! Samplers

#[macro_use]
extern crate log;

mod multi_jittered;
mod n_rooks;

// Re-export.
pub use multi_jittered::*;
pub use n_rooks::*;
