//! Common sampling functions.

use crate::geometry::*;
use crate::math::*;

/// Sample a point on a unit disk by mapping from a unit square to the unit
/// circle. The concentric mapping takes points in [-1, 1]^2 to the unit disk
/// by uniformly mapping concentric squares to concentric circles.
///
/// * `u` - The random sample point.
pub fn concentric_sample_disk(u: &Point2f) -> Point2f {
    // Map uniform random numbers to [-1,1]^2.
    let ox = 2.0 * u.x - 1.0;
    let oy = 2.0 * u.y - 1.0;

    // Handle degeneracy at the origin.
    if ox == 0.0 && oy == 0.0 {
        return Point2f::zero();
    }

    // Apply concentric mapping to point.
    let (r, theta) = if abs(ox) > abs(oy) {
        (ox, PI_OVER_FOUR * (oy / ox))
    } else {
        (oy, PI_OVER_TWO - PI_OVER_FOUR * (ox / oy))
    };

    Point2f::new(r * theta.cos(), r * theta.sin())
}

/// Uniformly sample a direction on a hemisphere about the +z axis.
///
/// * `u` - The random sample point.
pub fn uniform_sample_hemisphere(u: &Point2f) -> Vector3f {
    let z = u.x;
    let r = max(0.0, 1.0 - z * z).sqrt();
    let phi = TWO_PI * u.y;
    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Returns the PDF for uniformly sampling a direction from a hemisphere.
#[inline]
pub fn uniform_hemisphere_pdf() -> Float {
    INV_TWO_PI
}

/// Sample a direction about the +z axis with density proportional to
/// cos^e of the polar angle. An exponent of 1 gives the cosine-weighted
/// distribution used for diffuse reflection; larger exponents tighten the
/// lobe for glossy reflection.
///
/// * `u` - The random sample point.
/// * `e` - The cosine power exponent.
pub fn cosine_power_sample_hemisphere(u: &Point2f, e: Float) -> Vector3f {
    debug_assert!(e >= 0.0);
    let phi = TWO_PI * u.x;
    let cos_theta = (1.0 - u.y).powf(1.0 / (e + 1.0));
    let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
    Vector3f::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

/// Returns the PDF for cosine-weighted hemisphere sampling.
///
/// * `cos_theta` - Cosine of the polar angle of the sampled direction.
#[inline]
pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::*;
    use float_cmp::approx_eq;

    #[test]
    fn concentric_mapping_stays_inside_unit_disk() {
        let mut rng = RNG::new(1);
        for _ in 0..10_000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let p = concentric_sample_disk(&u);
            assert!(p.x * p.x + p.y * p.y <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn concentric_mapping_of_square_center_is_disk_center() {
        let p = concentric_sample_disk(&Point2f::new(0.5, 0.5));
        assert_eq!(p, Point2f::zero());
    }

    #[test]
    fn uniform_hemisphere_directions_are_unit_and_upward() {
        let mut rng = RNG::new(2);
        for _ in 0..10_000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let w = uniform_sample_hemisphere(&u);
            assert!(w.z >= 0.0);
            assert!(approx_eq!(f32, w.length(), 1.0, epsilon = 1e-4));
        }
    }

    #[test]
    fn cosine_power_directions_are_unit_and_upward() {
        let mut rng = RNG::new(3);
        for e in [0.0, 1.0, 10.0, 100.0] {
            for _ in 0..1000 {
                let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
                let w = cosine_power_sample_hemisphere(&u, e);
                assert!(w.z >= 0.0);
                assert!(approx_eq!(f32, w.length(), 1.0, epsilon = 1e-4));
            }
        }
    }

    #[test]
    fn high_exponent_tightens_the_lobe() {
        // With a large exponent the polar angle concentrates near zero.
        let mut rng = RNG::new(4);
        for _ in 0..1000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let w = cosine_power_sample_hemisphere(&u, 10_000.0);
            assert!(w.z > 0.9);
        }
    }
}
