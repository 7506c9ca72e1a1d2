//! Glossy Specular Reflection

use super::*;
use crate::sampling::*;

/// BRDF for a glossy specular lobe of the form (r · wi)^e about the mirror
/// reflection direction r.
#[derive(Clone)]
pub struct GlossySpecularBrdf {
    /// Reflection model flags.
    brdf_type: BrdfType,

    /// Specular reflection coefficient.
    ks: Float,

    /// Specular colour.
    cs: Spectrum,

    /// Specular power; larger values tighten the lobe.
    exp: Float,
}

impl GlossySpecularBrdf {
    /// Create a new instance of `GlossySpecularBrdf`.
    ///
    /// * `ks`  - Specular reflection coefficient.
    /// * `cs`  - Specular colour.
    /// * `exp` - Specular power.
    pub fn new(ks: Float, cs: Spectrum, exp: Float) -> Self {
        Self {
            brdf_type: BrdfType::REFLECTION | BrdfType::GLOSSY,
            ks,
            cs,
            exp,
        }
    }

    /// Allocate a new instance of `GlossySpecularBrdf` in an arena.
    ///
    /// * `arena` - The arena.
    /// * `ks`    - Specular reflection coefficient.
    /// * `cs`    - Specular colour.
    /// * `exp`   - Specular power.
    pub fn alloc(arena: &Bump, ks: Float, cs: Spectrum, exp: Float) -> &mut Brdf {
        arena.alloc(Brdf::GlossySpecular(Self::new(ks, cs, exp)))
    }

    /// Returns the reflection model flags.
    pub fn get_type(&self) -> BrdfType {
        self.brdf_type
    }

    /// Returns the value of the reflectance model for the given pair of
    /// directions. Zero outside the lobe.
    ///
    /// * `si` - The surface interaction.
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    pub fn f(&self, si: &SurfaceInteraction, wo: &Vector3f, wi: &Vector3f) -> Spectrum {
        let r = reflect(wi, &si.n);
        let r_dot_wo = r.dot(wo);
        if r_dot_wo > 0.0 {
            self.cs * self.ks * r_dot_wo.powf(self.exp)
        } else {
            Spectrum::black()
        }
    }

    /// Returns the bi-hemispherical reflectance. The glossy lobe contributes
    /// nothing to ambient reflection.
    ///
    /// * `si` - The surface interaction.
    /// * `wo` - Outgoing direction.
    pub fn rho(&self, _si: &SurfaceInteraction, _wo: &Vector3f) -> Spectrum {
        Spectrum::black()
    }

    /// Samples an incident direction from the cosine-power lobe about the
    /// mirror reflection of the outgoing direction.
    ///
    /// * `si` - The surface interaction.
    /// * `wo` - Outgoing direction.
    /// * `u`  - A unit-square sample point driving the direction choice.
    pub fn sample_f(&self, si: &SurfaceInteraction, wo: &Vector3f, u: &Point2f) -> BrdfSample {
        let r = reflect(wo, &si.n);
        let (t, b) = coordinate_system(&r);
        let d = cosine_power_sample_hemisphere(u, self.exp);

        let mut wi = t * d.x + b * d.y + r * d.z;
        if si.n.dot(&wi) < 0.0 {
            // Reflect the tangential part back above the horizon.
            wi = t * -d.x + b * -d.y + r * d.z;
        }

        let lobe = max(r.dot(&wi), 0.0).powf(self.exp);
        let pdf = lobe * max(si.n.dot(&wi), 0.0);

        BrdfSample {
            wi,
            f: self.cs * self.ks * lobe,
            pdf,
        }
    }
}
