//! Spheres

use core::geometry::*;
use core::interaction::*;
use core::math::*;

/// A sphere given by its center and radius.
#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3f,

    /// Radius of the sphere.
    pub radius: Float,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// * `center` - Center of the sphere.
    /// * `radius` - Radius of the sphere.
    pub fn new(center: Point3f, radius: Float) -> Self {
        assert!(radius > 0.0, "radius must be positive");
        Self { center, radius }
    }

    /// Solves the quadratic for the ray-sphere intersection and returns the
    /// nearest parametric distance past the self-intersection guard, if any
    /// lies within the ray's extent.
    ///
    /// * `r` - The ray.
    fn hit_distance(&self, r: &Ray) -> Option<Float> {
        let oc = r.o - self.center;
        let a = r.d.dot(&r.d);
        let b = 2.0 * oc.dot(&r.d);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let e = discriminant.sqrt();
        let denom = 2.0 * a;

        let mut t = (-b - e) / denom; // nearer root
        if t <= HIT_EPSILON {
            t = (-b + e) / denom;
        }
        if t <= HIT_EPSILON || t > r.t_max {
            return None;
        }

        Some(t)
    }

    /// Returns the surface details at the nearest intersection with a ray,
    /// or `None` if the ray misses.
    ///
    /// * `r` - The ray.
    pub fn intersect(&self, r: &Ray) -> Option<SurfaceInteraction> {
        let t = self.hit_distance(r)?;
        let p = r.at(t);
        let n = (p - self.center) / self.radius;
        let wo = -r.d.normalize();

        Some(SurfaceInteraction::new(p, n, wo, t))
    }

    /// Returns the parametric distance to the nearest intersection with a
    /// ray, or `None` if the ray misses. Cheaper form for shadow rays, which
    /// only need to know whether anything is hit.
    ///
    /// * `r` - The ray.
    pub fn intersect_p(&self, r: &Ray) -> Option<Float> {
        self.hit_distance(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn unit_sphere() -> Sphere {
        Sphere::new(Point3f::zero(), 1.0)
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn non_positive_radius_is_rejected() {
        let _ = Sphere::new(Point3f::zero(), 0.0);
    }

    #[test]
    fn direct_hit_reports_the_nearer_root() {
        let s = unit_sphere();
        let r = Ray::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));

        let si = s.intersect(&r).unwrap();
        assert!(approx_eq!(f32, si.t, 4.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, si.p.z, -1.0, epsilon = 1e-5));

        // Outward unit normal faces the ray origin.
        assert!(approx_eq!(f32, si.n.z, -1.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, si.n.length(), 1.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, si.wo.z, -1.0, epsilon = 1e-5));
    }

    #[test]
    fn grazing_miss_returns_none() {
        let s = unit_sphere();
        let r = Ray::new(Point3f::new(0.0, 2.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(s.intersect(&r).is_none());
        assert!(s.intersect_p(&r).is_none());
    }

    #[test]
    fn ray_starting_inside_hits_the_far_wall() {
        let s = unit_sphere();
        let r = Ray::new(Point3f::zero(), Vector3f::new(0.0, 0.0, 1.0));

        let si = s.intersect(&r).unwrap();
        assert!(approx_eq!(f32, si.t, 1.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, si.n.z, 1.0, epsilon = 1e-5));
    }

    #[test]
    fn sphere_behind_the_ray_is_not_hit() {
        let s = unit_sphere();
        let r = Ray::new(Point3f::new(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(s.intersect(&r).is_none());
    }

    #[test]
    fn hits_beyond_the_ray_extent_are_rejected() {
        let s = unit_sphere();
        let r = Ray::bounded(
            Point3f::new(0.0, 0.0, -5.0),
            Vector3f::new(0.0, 0.0, 1.0),
            2.0,
        );
        assert!(s.intersect(&r).is_none());
    }

    #[test]
    fn shadow_form_agrees_with_the_full_intersection() {
        let s = Sphere::new(Point3f::new(1.0, 2.0, 3.0), 0.5);
        let r = Ray::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(1.0, 2.0, 3.0).normalize());

        let si = s.intersect(&r).unwrap();
        let t = s.intersect_p(&r).unwrap();
        assert!(approx_eq!(f32, si.t, t, epsilon = 1e-6));
    }
}
