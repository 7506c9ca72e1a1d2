//! Multi-Jittered Sampler.

use pbrt_core::geometry::*;
use pbrt_core::math::*;
use pbrt_core::rng::*;
use pbrt_core::sampler::*;
use itertools::iproduct;

/// Implements a sampler whose sets are stratified simultaneously on a coarse
/// n×n grid and on the n² fine one-dimensional strata of each axis, where
/// n = √sample_count. Correlated shuffles randomize each axis without moving
/// any point out of its stratum on the other axis.
pub struct MultiJitteredSampler {
    /// The common sampler data.
    pub data: SamplerData,

    /// The deviate stream driving generation.
    rng: RNG,
}

impl MultiJitteredSampler {
    /// Create a new `MultiJitteredSampler` and generate its sample pool.
    /// `sample_count` must be a perfect square for the stratification
    /// guarantees to hold, and construction rejects anything else.
    ///
    /// * `sample_count` - Number of samples in one set.
    /// * `set_count`    - Number of independently generated sets.
    /// * `seed`         - Optional seed for the random number generator.
    pub fn new(sample_count: usize, set_count: usize, seed: Option<u64>) -> Self {
        let n = (sample_count as Float).sqrt() as usize;
        assert!(
            n * n == sample_count,
            "sample_count {} is not a perfect square",
            sample_count
        );

        let mut sampler = Self {
            data: SamplerData::new(sample_count, set_count),
            rng: new_rng(seed),
        };
        Sampler::generate_samples(&mut sampler);
        sampler
    }

    /// Places one jittered point per coarse cell of one set, positioned so
    /// that the fine strata of both axes are each covered exactly once.
    ///
    /// * `base` - Pool offset of the set.
    /// * `n`    - Grid dimension.
    fn place_initial_pattern(&mut self, base: usize, n: usize) {
        let cell_width = 1.0 / self.data.sample_count as Float;

        for (i, j) in iproduct!(0..n, 0..n) {
            let x = (i * n + j) as Float * cell_width + self.rng.uniform_real(0.0, cell_width);
            let y = (j * n + i) as Float * cell_width + self.rng.uniform_real(0.0, cell_width);
            self.data.samples[base + i * n + j] =
                Point2f::new(min(x, ONE_MINUS_EPSILON), min(y, ONE_MINUS_EPSILON));
        }
    }

    /// Shuffles X-coordinates within each row of one set. Swapping only among
    /// the columns at or after the current one keeps the row's set of
    /// occupied fine-X strata intact.
    ///
    /// * `base` - Pool offset of the set.
    /// * `n`    - Grid dimension.
    fn shuffle_x_coordinates(&mut self, base: usize, n: usize) {
        for (i, j) in iproduct!(0..n, 0..n) {
            let k = self.rng.uniform_int(j as Int, (n - 1) as Int) as usize;
            let current = base + i * n + j;
            let target = base + i * n + k;

            let x = self.data.samples[current].x;
            self.data.samples[current].x = self.data.samples[target].x;
            self.data.samples[target].x = x;
        }
    }

    /// Shuffles Y-coordinates within each column of one set, symmetric to
    /// the X-shuffle.
    ///
    /// * `base` - Pool offset of the set.
    /// * `n`    - Grid dimension.
    fn shuffle_y_coordinates(&mut self, base: usize, n: usize) {
        for (i, j) in iproduct!(0..n, 0..n) {
            let k = self.rng.uniform_int(j as Int, (n - 1) as Int) as usize;
            let current = base + j * n + i;
            let target = base + k * n + i;

            let y = self.data.samples[current].y;
            self.data.samples[current].y = self.data.samples[target].y;
            self.data.samples[target].y = y;
        }
    }
}

impl Default for MultiJitteredSampler {
    /// Returns the degenerate single-sample, single-set pattern.
    fn default() -> Self {
        Self::new(1, 1, None)
    }
}

impl Sampler for MultiJitteredSampler {
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
        let n = (self.data.sample_count as Float).sqrt() as usize;

        for set in 0..self.data.set_count {
            let base = set * self.data.sample_count;
            self.place_initial_pattern(base, n);
            self.shuffle_x_coordinates(base, n);
            self.shuffle_y_coordinates(base, n);
        }

        debug!(
            "generated {} multi-jittered sets of {} samples",
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

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Bins a coordinate in [0, 1) into one of `bins` equal-width strata.
    fn stratum(v: Float, bins: usize) -> usize {
        min((v * bins as Float) as usize, bins - 1)
    }

    #[test]
    #[should_panic(expected = "not a perfect square")]
    fn non_square_sample_count_is_rejected() {
        let _ = MultiJitteredSampler::new(8, 1, None);
    }

    #[test]
    #[should_panic(expected = "sample_count must be positive")]
    fn zero_sample_count_is_rejected() {
        let _ = MultiJitteredSampler::new(0, 1, None);
    }

    #[test]
    fn identical_seeds_generate_identical_pools() {
        let a = MultiJitteredSampler::new(16, 3, Some(42));
        let b = MultiJitteredSampler::new(16, 3, Some(42));
        assert_eq!(a.data.samples, b.data.samples);
    }

    #[test]
    fn cloned_samplers_keep_the_configuration_but_not_the_pattern() {
        let a = MultiJitteredSampler::new(16, 3, Some(1));
        let b = a.clone_sampler(2);
        assert_eq!(b.sample_count(), 16);
        assert_eq!(b.set_count(), 3);
        assert_ne!(a.data.samples, b.get_data().samples);
    }

    #[test]
    fn quadrants_of_a_four_sample_set_stay_covered() {
        // 4 samples, n = 2: every set keeps one point per quadrant, and each
        // half-row holds one point from each X-half.
        let s = MultiJitteredSampler::new(4, 10, Some(7));
        for set in 0..10 {
            let points = s.data.set(set);

            let mut cells = [0usize; 4];
            for p in points {
                cells[2 * stratum(p.x, 2) + stratum(p.y, 2)] += 1;
            }
            assert_eq!(cells, [1, 1, 1, 1]);

            for row in 0..2 {
                let in_row: Vec<_> =
                    points.iter().filter(|p| stratum(p.y, 2) == row).collect();
                assert_eq!(in_row.len(), 2);
                let halves: Vec<_> = in_row.iter().map(|p| stratum(p.x, 2)).collect();
                assert!(halves.contains(&0) && halves.contains(&1));
            }
        }
    }

    proptest! {
        #[test]
        fn all_coordinates_lie_in_the_unit_interval(
            n in 1usize..6,
            sets in 1usize..5,
            seed in proptest::num::u64::ANY,
        ) {
            let s = MultiJitteredSampler::new(n * n, sets, Some(seed));
            for p in &s.data.samples {
                prop_assert!((0.0..1.0).contains(&p.x));
                prop_assert!((0.0..1.0).contains(&p.y));
            }
        }

        // Power-of-two grid dimensions keep the cell width exactly
        // representable, so stratum binning in the assertions is exact.
        #[test]
        fn every_coarse_cell_holds_exactly_one_sample(
            log_n in 0usize..3,
            sets in 1usize..5,
            seed in proptest::num::u64::ANY,
        ) {
            let n = 1 << log_n;
            let s = MultiJitteredSampler::new(n * n, sets, Some(seed));
            for set in 0..sets {
                let mut cells = vec![0usize; n * n];
                for p in s.data.set(set) {
                    cells[stratum(p.x, n) * n + stratum(p.y, n)] += 1;
                }
                prop_assert!(cells.iter().all(|&c| c == 1));
            }
        }

        #[test]
        fn every_fine_stratum_holds_exactly_one_coordinate(
            log_n in 0usize..3,
            sets in 1usize..5,
            seed in proptest::num::u64::ANY,
        ) {
            let n = 1 << log_n;
            let count = n * n;
            let s = MultiJitteredSampler::new(count, sets, Some(seed));
            for set in 0..sets {
                let mut x_strata = vec![0usize; count];
                let mut y_strata = vec![0usize; count];
                for p in s.data.set(set) {
                    x_strata[stratum(p.x, count)] += 1;
                    y_strata[stratum(p.y, count)] += 1;
                }
                prop_assert!(x_strata.iter().all(|&c| c == 1));
                prop_assert!(y_strata.iter().all(|&c| c == 1));
            }
        }
    }

    #[test]
    fn odd_grid_dimensions_keep_both_stratification_levels() {
        let n = 3;
        let count = n * n;
        let s = MultiJitteredSampler::new(count, 4, Some(1234));
        for set in 0..4 {
            let points = s.data.set(set);

            let mut cells = vec![0usize; n * n];
            for p in points {
                cells[stratum(p.x, n) * n + stratum(p.y, n)] += 1;
            }
            assert!(cells.iter().all(|&c| c == 1));

            // One coordinate per fine stratum on each axis, checked against
            // the sorted order with a small tolerance for rounding at the
            // stratum edges.
            for axis in 0..2 {
                let mut vs: Vec<Float> = points.iter().map(|p| p[axis]).collect();
                vs.sort_by(|a, b| a.partial_cmp(b).unwrap());
                for (i, v) in vs.iter().enumerate() {
                    assert!(*v >= i as Float / count as Float - 1e-5);
                    assert!(*v < (i + 1) as Float / count as Float + 1e-5);
                }
            }
        }
    }
}
