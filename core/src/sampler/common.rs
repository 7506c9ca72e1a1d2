//! Common

use crate::geometry::*;
use crate::math::*;
use crate::sampling::*;

/// Stores the sample pool and implements the functionality shared by all
/// pattern generators. The pool holds `set_count` independently generated
/// sets of `sample_count` points each, laid out set-major.
#[derive(Clone)]
pub struct SamplerData {
    /// Number of samples in one set.
    pub sample_count: usize,

    /// Number of independently generated, mutually decorrelated sets.
    pub set_count: usize,

    /// The unit-square sample pool, `sample_count * set_count` points.
    pub samples: Vec<Point2f>,

    /// The pool mapped to the unit disk; empty until
    /// `map_samples_to_unit_disk` runs.
    pub disk_samples: Vec<Point2f>,

    /// The pool mapped to cosine-power-weighted hemisphere directions; empty
    /// until `map_samples_to_hemisphere` runs.
    pub hemisphere_samples: Vec<Vector3f>,
}

impl SamplerData {
    /// Create a new `SamplerData` instance with a zeroed pool.
    ///
    /// * `sample_count` - Number of samples in one set.
    /// * `set_count`    - Number of sets.
    pub fn new(sample_count: usize, set_count: usize) -> Self {
        assert!(sample_count > 0, "sample_count must be positive");
        assert!(set_count > 0, "set_count must be positive");

        Self {
            sample_count,
            set_count,
            samples: vec![Point2f::zero(); sample_count * set_count],
            disk_samples: vec![],
            hemisphere_samples: vec![],
        }
    }

    /// Returns one point of the unit-square pool.
    ///
    /// * `set` - The set index.
    /// * `i`   - The sample index within the set.
    pub fn sample(&self, set: usize, i: usize) -> Point2f {
        debug_assert!(set < self.set_count && i < self.sample_count);
        self.samples[set * self.sample_count + i]
    }

    /// Returns the points of one set of the unit-square pool.
    ///
    /// * `set` - The set index.
    pub fn set(&self, set: usize) -> &[Point2f] {
        debug_assert!(set < self.set_count);
        let start = set * self.sample_count;
        &self.samples[start..start + self.sample_count]
    }

    /// Builds the derived unit-disk pool by pushing every unit-square sample
    /// through the concentric mapping. Setup-phase only; call before the
    /// sampler is shared.
    pub fn map_samples_to_unit_disk(&mut self) {
        self.disk_samples = self.samples.iter().map(concentric_sample_disk).collect();
        debug!("mapped {} samples to the unit disk", self.disk_samples.len());
    }

    /// Builds the derived hemisphere pool with density proportional to
    /// cos^e of the polar angle. Setup-phase only; call before the sampler is
    /// shared.
    ///
    /// * `e` - The cosine power exponent.
    pub fn map_samples_to_hemisphere(&mut self, e: Float) {
        self.hemisphere_samples = self
            .samples
            .iter()
            .map(|u| cosine_power_sample_hemisphere(u, e))
            .collect();
        debug!(
            "mapped {} samples to the hemisphere (e = {})",
            self.hemisphere_samples.len(),
            e
        );
    }
}
