//! Sample Stream

use super::*;
use crate::geometry::*;
use crate::math::*;

/// Lane-local view of a shared sampler. Each rendering lane owns one stream:
/// its own deviate generator picks a fresh set for every retrieval, and its
/// own cursor sweeps a full set before any point repeats. Streams never
/// mutate the pool, so any number of them may read one sampler concurrently.
pub struct SampleStream {
    /// The shared sampler.
    sampler: ArcSampler,

    /// Lane-local deviate stream used for set selection.
    rng: RNG,

    /// Number of samples this stream has retrieved.
    count: usize,
}

impl SampleStream {
    /// Create a new `SampleStream`.
    ///
    /// * `sampler` - The shared sampler to draw from.
    /// * `seed`    - Seed for the lane-local deviate stream; distinct lanes
    ///               must use distinct seeds.
    pub fn new(sampler: ArcSampler, seed: u64) -> Self {
        Self {
            sampler,
            rng: RNG::new(seed),
            count: 0,
        }
    }

    /// Draws a fresh random set index.
    fn next_set(&mut self) -> usize {
        let set_count = self.sampler.get_data().set_count;
        self.rng.uniform_int(0, set_count as Int - 1) as usize
    }

    /// Returns the next unit-square sample point.
    pub fn get_sample(&mut self) -> Point2f {
        let set = self.next_set();
        let data = self.sampler.get_data();
        let i = self.count % data.sample_count;
        self.count = self.count.wrapping_add(1);
        data.samples[set * data.sample_count + i]
    }

    /// Returns the next unit-disk sample point. The sampler's disk pool must
    /// have been built during setup.
    pub fn get_disk_sample(&mut self) -> Point2f {
        let set = self.next_set();
        let data = self.sampler.get_data();
        assert!(
            !data.disk_samples.is_empty(),
            "samples were never mapped to the unit disk"
        );
        let i = self.count % data.sample_count;
        self.count = self.count.wrapping_add(1);
        data.disk_samples[set * data.sample_count + i]
    }

    /// Returns the next hemisphere sample direction. The sampler's
    /// hemisphere pool must have been built during setup.
    pub fn get_hemisphere_sample(&mut self) -> Vector3f {
        let set = self.next_set();
        let data = self.sampler.get_data();
        assert!(
            !data.hemisphere_samples.is_empty(),
            "samples were never mapped to the hemisphere"
        );
        let i = self.count % data.sample_count;
        self.count = self.count.wrapping_add(1);
        data.hemisphere_samples[set * data.sample_count + i]
    }
}
