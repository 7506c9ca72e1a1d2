//! N-Rooks Sampler.

use pbrt_core::geometry::*;
use pbrt_core::math::*;
use pbrt_core::rng::*;
use pbrt_core::sampler::*;

/// Implements a sampler whose sets place exactly one sample in every row and
/// every column of an implicit sample_count × sample_count grid. Points are
/// seeded along the main diagonal and each axis is then permuted
/// independently, which keeps the Latin-square property but offers no coarse
/// two-dimensional stratification.
pub struct NRooksSampler {
    /// The common sampler data.
    pub data: SamplerData,

    /// The deviate stream driving generation.
    rng: RNG,
}

impl NRooksSampler {
    /// Create a new `NRooksSampler` and generate its sample pool.
    ///
    /// * `sample_count` - Number of samples in one set.
    /// * `set_count`    - Number of independently generated sets.
    /// * `seed`         - Optional seed for the random number generator.
    pub fn new(sample_count: usize, set_count: usize, seed: Option<u64>) -> Self {
        let mut sampler = Self {
            data: SamplerData::new(sample_count, set_count),
            rng: new_rng(seed),
        };
        Sampler::generate_samples(&mut sampler);
        sampler
    }

    /// Seeds the points of one set along the main diagonal, one per diagonal
    /// stratum.
    ///
    /// * `base` - Pool offset of the set.
    fn place_diagonal_pattern(&mut self, base: usize) {
        let inv_count = 1.0 / self.data.sample_count as Float;

        for i in 0..self.data.sample_count {
            let x = (i as Float + self.rng.uniform_float()) * inv_count;
            let y = (i as Float + self.rng.uniform_float()) * inv_count;
            self.data.samples[base + i] =
                Point2f::new(min(x, ONE_MINUS_EPSILON), min(y, ONE_MINUS_EPSILON));
        }
    }

    /// Permutes the X-coordinates of one set. Every index participates, so
    /// the permutation is an unbiased Fisher-Yates; the coordinates stay a
    /// permutation of the diagonal values, preserving one point per column.
    ///
    /// * `base` - Pool offset of the set.
    fn shuffle_x_coordinates(&mut self, base: usize) {
        let count = self.data.sample_count;

        for i in 0..count {
            let target = base + i + self.rng.bounded_uniform_u32(0, (count - i) as u32) as usize;
            let current = base + i;

            let x = self.data.samples[current].x;
            self.data.samples[current].x = self.data.samples[target].x;
            self.data.samples[target].x = x;
        }
    }

    /// Permutes the Y-coordinates of one set, symmetric to the X-shuffle and
    /// drawn independently of it.
    ///
    /// * `base` - Pool offset of the set.
    fn shuffle_y_coordinates(&mut self, base: usize) {
        let count = self.data.sample_count;

        for i in 0..count {
            let target = base + i + self.rng.bounded_uniform_u32(0, (count - i) as u32) as usize;
            let current = base + i;

            let y = self.data.samples[current].y;
            self.data.samples[current].y = self.data.samples[target].y;
            self.data.samples[target].y = y;
        }
    }
}

impl Default for NRooksSampler {
    /// Returns the degenerate single-sample, single-set pattern.
    fn default() -> Self {
        Self::new(1, 1, None)
    }
}

impl Sampler for NRooksSampler {
    /// Returns a shared reference to the underlying `SamplerData`.
    fn get_data(&self) -> &SamplerData {
        &self.data
    }

    /// Returns a mutable reference to the underlying `SamplerData`.
    fn get_data_mut(&mut self) -> &mut SamplerData {
        &mut self.data
    }

    /// Populates every element of the sample pool, one set at a time.
    fn generate_samples(&mut self) {
        for set in 0..self.data.set_count {
            let base = set * self.data.sample_count;
            self.place_diagonal_pattern(base);
            self.shuffle_x_coordinates(base);
            self.shuffle_y_coordinates(base);
        }

        debug!(
            "generated {} n-rooks sets of {} samples",
            self.data.set_count, self.data.sample_count
        );
    }

    /// Generates a new instance of an initial `Sampler` with the same
    /// configuration for use by a rendering thread.
    ///
    /// * `seed` - The seed for the random number generator.
    fn clone_sampler(&self, seed: u64) -> Box<dyn Sampler + Send + Sync> {
        Box::new(Self::new(
            self.data.sample_count,
            self.data.set_count,
            Some(seed),
        ))
    }
}
