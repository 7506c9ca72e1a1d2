//! Common math stuff

mod common;

// Re-export
pub use common::*;
