//! 3-D Vectors

#![allow(dead_code)]
use crate::math::*;
use num_traits::{Num, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3-D vector containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    /// X-component.
    pub x: T,

    /// Y-component.
    pub y: T,

    /// Z-component.
    pub z: T,
}

/// 3-D vector containing `Float` values.
pub type Vector3f = Vector3<Float>;

impl<T: Num> Vector3<T> {
    /// Creates a new 3-D vector.
    ///
    /// * `x` - X-component.
    /// * `y` - Y-component.
    /// * `z` - Z-component.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D zero vector.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns true if any component is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the square of the vector's length.
    pub fn length_squared(&self) -> T
    where
        T: Copy,
    {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the vector's length.
    pub fn length(&self) -> T
    where
        T: num_traits::Float,
    {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector in the same direction.
    pub fn normalize(&self) -> Self
    where
        T: num_traits::Float,
    {
        *self / self.length()
    }

    /// Returns the dot product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn dot(&self, other: &Self) -> T
    where
        T: Copy,
    {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn cross(&self, other: &Self) -> Self
    where
        T: Copy,
    {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

/// Constructs a local coordinate system from a single unit vector, returning
/// the two vectors that complete the orthonormal basis.
///
/// * `v1` - A unit vector.
pub fn coordinate_system(v1: &Vector3f) -> (Vector3f, Vector3f) {
    let v2 = if abs(v1.x) > abs(v1.y) {
        Vector3f::new(-v1.z, 0.0, v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt()
    } else {
        Vector3f::new(0.0, v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt()
    };
    (v2, v1.cross(&v2))
}

impl<T: Num> Add for Vector3<T> {
    type Output = Self;

    /// Adds another vector.
    ///
    /// * `other` - The other vector.
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Num + Copy> AddAssign for Vector3<T> {
    /// Adds another vector.
    ///
    /// * `other` - The other vector.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Num> Sub for Vector3<T> {
    type Output = Self;

    /// Subtracts another vector.
    ///
    /// * `other` - The other vector.
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num + Copy> SubAssign for Vector3<T> {
    /// Subtracts another vector.
    ///
    /// * `other` - The other vector.
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Num + Copy> Mul<T> for Vector3<T> {
    type Output = Self;

    /// Scales the vector by a factor.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self {
        Self::new(self.x * f, self.y * f, self.z * f)
    }
}

impl<T: Num + Copy> MulAssign<T> for Vector3<T> {
    /// Scales the vector by a factor.
    ///
    /// * `f` - The scaling factor.
    fn mul_assign(&mut self, f: T) {
        *self = *self * f;
    }
}

impl<T: Num + Copy> Div<T> for Vector3<T> {
    type Output = Self;

    /// Scales the vector by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div(self, f: T) -> Self {
        debug_assert!(!f.is_zero());
        Self::new(self.x / f, self.y / f, self.z / f)
    }
}

impl<T: Num + Copy> DivAssign<T> for Vector3<T> {
    /// Scales the vector by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div_assign(&mut self, f: T) {
        *self = *self / f;
    }
}

impl<T: Num + Neg<Output = T>> Neg for Vector3<T> {
    type Output = Self;

    /// Flips the direction of the vector.
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    /// Formats the vector as [x, y, z].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    #[test]
    fn cross_of_axes() {
        let x = Vector3f::new(1.0, 0.0, 0.0);
        let y = Vector3f::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3f::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn coordinate_system_is_orthonormal() {
        let w = Vector3f::new(0.0, 0.0, 1.0);
        let (u, v) = coordinate_system(&w);
        assert!(approx_eq!(f32, u.dot(&w), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, v.dot(&w), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, u.dot(&v), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, u.length(), 1.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, v.length(), 1.0, epsilon = 1e-6));
    }

    fn vector3_f32() -> impl Strategy<Value = Vector3f> {
        (-100.0..100.0f32, -100.0..100.0f32, -100.0..100.0f32)
            .prop_map(|(x, y, z)| Vector3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn dot_with_self_is_length_squared(v in vector3_f32()) {
            prop_assert_eq!(v.dot(&v), v.length_squared());
        }

        #[test]
        fn cross_is_perpendicular(v1 in vector3_f32(), v2 in vector3_f32()) {
            let c = v1.cross(&v2);
            let tolerance = 1e-4 * (c.length() * v1.length() + 1.0);
            prop_assert!(abs(c.dot(&v1)) <= tolerance);
            prop_assert!(abs(c.dot(&v2)) <= tolerance);
        }

        #[test]
        fn normalized_length_is_one(v in vector3_f32()) {
            prop_assume!(v.length_squared() > 1e-6);
            prop_assert!(approx_eq!(f32, v.normalize().length(), 1.0, epsilon = 1e-5));
        }
    }
}
