//! Lambertian Reflection

use super::*;
use crate::sampling::*;

/// BRDF for the Lambertian model of perfect diffuse surfaces that scatter
/// incident illumination equally in all directions.
#[derive(Clone)]
pub struct LambertianBrdf {
    /// Reflection model flags.
    brdf_type: BrdfType,

    /// Diffuse reflection coefficient.
    kd: Float,

    /// Diffuse colour.
    cd: Spectrum,
}

impl LambertianBrdf {
    /// Create a new instance of `LambertianBrdf`.
    ///
    /// * `kd` - Diffuse reflection coefficient.
    /// * `cd` - Diffuse colour.
    pub fn new(kd: Float, cd: Spectrum) -> Self {
        Self {
            brdf_type: BrdfType::REFLECTION | BrdfType::DIFFUSE,
            kd,
            cd,
        }
    }

    /// Allocate a new instance of `LambertianBrdf` in an arena.
    ///
    /// * `arena` - The arena.
    /// * `kd`    - Diffuse reflection coefficient.
    /// * `cd`    - Diffuse colour.
    pub fn alloc(arena: &Bump, kd: Float, cd: Spectrum) -> &mut Brdf {
        arena.alloc(Brdf::Lambertian(Self::new(kd, cd)))
    }

    /// Returns the reflection model flags.
    pub fn get_type(&self) -> BrdfType {
        self.brdf_type
    }

    /// Returns the value of the reflectance model for the given pair of
    /// directions.
    ///
    /// * `si` - The surface interaction.
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, _si: &SurfaceInteraction, _wo: &Vector3f, _wi: &Vector3f) -> Spectrum {
        self.cd * self.kd * INV_PI
    }

    /// Returns the bi-hemispherical reflectance.
    ///
    /// * `si` - The surface interaction.
    /// * `wo` - Outgoing direction.
    pub fn rho(&self, _si: &SurfaceInteraction, _wo: &Vector3f) -> Spectrum {
        self.cd * self.kd
    }

    /// Samples a cosine-weighted incident direction about the shading normal.
    ///
    /// * `si` - The surface interaction.
    /// * `wo` - Outgoing direction.
    /// * `u`  - A unit-square sample point driving the direction choice.
    pub fn sample_f(&self, si: &SurfaceInteraction, wo: &Vector3f, u: &Point2f) -> BrdfSample {
        let (t, b) = coordinate_system(&si.n);
        let d = cosine_power_sample_hemisphere(u, 1.0);
        let wi = (t * d.x + b * d.y + si.n * d.z).normalize();
        let pdf = cosine_hemisphere_pdf(max(si.n.dot(&wi), 0.0));

        BrdfSample {
            wi,
            f: self.f(si, wo, &wi),
            pdf,
        }
    }
}
