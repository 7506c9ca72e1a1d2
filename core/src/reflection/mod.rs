//! Reflection and surface scattering models

use crate::geometry::*;
use crate::interaction::*;
use crate::math::*;
use crate::spectrum::*;
use bitflags::bitflags;
use bumpalo::Bump;

mod glossy_specular;
mod lambertian;

// Re-export
pub use glossy_specular::*;
pub use lambertian::*;

bitflags! {
    /// Stores combinations of reflection model flags.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct BrdfType: u8 {
        const REFLECTION = 1;
        const DIFFUSE = 2;
        const GLOSSY = 4;
    }
}

/// The result of sampling a reflectance model for an incident direction.
#[derive(Copy, Clone, Debug)]
pub struct BrdfSample {
    /// Sampled incident direction.
    pub wi: Vector3f,

    /// Value of the reflectance model for the sampled direction pair.
    pub f: Spectrum,

    /// Probability density of the sampled direction.
    pub pdf: Float,
}

/// Reflectance models. Enumerated directly rather than behind trait objects;
/// instances live in an arena owned by the scene-setup phase.
#[derive(Clone)]
pub enum Brdf {
    Lambertian(LambertianBrdf),
    GlossySpecular(GlossySpecularBrdf),
}

impl Brdf {
    /// Returns the reflection model flags.
    pub fn get_type(&self) -> BrdfType {
        match self {
            Brdf::Lambertian(b) => b.get_type(),
            Brdf::GlossySpecular(b) => b.get_type(),
        }
    }

    /// Tests whether the model matches all of the given flags.
    ///
    /// * `t` - The flags to match.
    pub fn matches_flags(&self, t: BrdfType) -> bool {
        self.get_type().contains(t)
    }

    /// Returns the value of the reflectance model for the given pair of
    /// directions.
    ///
    /// * `si` - The surface interaction.
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, si: &SurfaceInteraction, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        match self {
            Brdf::Lambertian(b) => b.f(si, wo, wi),
            Brdf::GlossySpecular(b) => b.f(si, wo, wi),
        }
    }

    /// Returns the bi-hemispherical reflectance.
    ///
    /// * `si` - The surface interaction.
    /// * `wo` - Outgoing direction.
    pub fn rho(&self, si: &SurfaceInteraction, wo: &Vector3f) -> Spectrum {
        match self {
            Brdf::Lambertian(b) => b.rho(si, wo),
            Brdf::GlossySpecular(b) => b.rho(si, wo),
        }
    }

    /// Samples an incident direction for the given outgoing direction.
    ///
    /// * `si` - The surface interaction.
    /// * `wo` - Outgoing direction.
    /// * `u`  - A unit-square sample point driving the direction choice.
    pub fn sample_f(&self, si: &SurfaceInteraction, wo: &Vector3f, u: &Point2f) -> BrdfSample {
        match self {
            Brdf::Lambertian(b) => b.sample_f(si, wo, u),
            Brdf::GlossySpecular(b) => b.sample_f(si, wo, u),
        }
    }
}

/// Returns the mirror reflection of a direction about a surface normal.
///
/// * `w` - The direction, pointing away from the surface.
/// * `n` - The unit surface normal.
pub fn reflect(w: &Vector3f, n: &Vector3f) -> Vector3f {
    -*w + *n * (2.0 * n.dot(w))
}
