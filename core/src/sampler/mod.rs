//! Sampler

mod common;
mod stream;

use crate::rng::*;
use std::sync::Arc;

// Re-export
pub use common::*;
pub use stream::*;

/// Interface for generators of well-distributed sample patterns over the unit
/// square. Concrete generators differ only in how they populate the shared
/// pool; the pool is written exactly once, on the construction path, and is
/// read-only afterwards.
pub trait Sampler {
    /// Returns a shared reference to the underlying `SamplerData`.
    fn get_data(&self) -> &SamplerData;

    /// Returns a mutable reference to the underlying `SamplerData`. Intended
    /// for the single-threaded setup phase only (e.g. building the derived
    /// pools) before the sampler is shared.
    fn get_data_mut(&mut self) -> &mut SamplerData;

    /// Populates every element of the sample pool. Invoked exactly once by
    /// the constructor of each concrete generator.
    fn generate_samples(&mut self);

    /// Generates a new instance of an initial `Sampler` with the same
    /// configuration for use by a rendering thread.
    ///
    /// * `seed` - The seed for the random number generator.
    fn clone_sampler(&self, seed: u64) -> Box<dyn Sampler + Send + Sync>;

    /// Returns the number of samples in one set.
    fn sample_count(&self) -> usize {
        self.get_data().sample_count
    }

    /// Returns the number of independently generated sample sets.
    fn set_count(&self) -> usize {
        self.get_data().set_count
    }
}

// Implement `Sampler` so `Box<dyn Sampler>` can be passed around where
// `&dyn Sampler` or `&mut dyn Sampler` can be used.
impl<S: Sampler + ?Sized> Sampler for Box<S> {
    #[inline]
    fn get_data(&self) -> &SamplerData {
        (**self).get_data()
    }

    #[inline]
    fn get_data_mut(&mut self) -> &mut SamplerData {
        (**self).get_data_mut()
    }

    #[inline]
    fn generate_samples(&mut self) {
        (**self).generate_samples();
    }

    #[inline]
    fn clone_sampler(&self, seed: u64) -> Box<dyn Sampler + Send + Sync> {
        (**self).clone_sampler(seed)
    }

    #[inline]
    fn sample_count(&self) -> usize {
        (**self).sample_count()
    }

    #[inline]
    fn set_count(&self) -> usize {
        (**self).set_count()
    }
}

/// Atomic reference counted `Sampler`, shared read-only across rendering
/// lanes once generation completes.
pub type ArcSampler = Arc<dyn Sampler + Send + Sync>;

/// Seeds a concrete generator's deviate stream.
///
/// * `seed` - Optional seed; `None` selects the default stream.
pub fn new_rng(seed: Option<u64>) -> RNG {
    match seed {
        Some(s) => RNG::new(s),
        None => RNG::default(),
    }
}
