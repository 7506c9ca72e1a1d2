//! 2-D Points

#![allow(dead_code)]
use crate::math::*;
use num_traits::{Num, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Sub, SubAssign};

/// A 2-D point containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,
}

/// 2-D point containing `Float` values.
pub type Point2f = Point2<Float>;

/// 2-D point containing `Int` values.
pub type Point2i = Point2<Int>;

impl<T: Num> Point2<T> {
    /// Creates a new 2-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new 2-D zero point.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero())
    }

    /// Returns true if either coordinate is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns the square of the distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance_squared(self, other: Self) -> T
    where
        T: Copy,
    {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        dx * dx + dy * dy
    }

    /// Returns the distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance(self, other: Self) -> T
    where
        T: num_traits::Float,
    {
        self.distance_squared(other).sqrt()
    }
}

impl<T: Num> Add for Point2<T> {
    type Output = Self;

    /// Adds the coordinates of another point.
    ///
    /// * `other` - The other point.
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Num + Copy> AddAssign for Point2<T> {
    /// Adds the coordinates of another point.
    ///
    /// * `other` - The other point.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Num> Sub for Point2<T> {
    type Output = Self;

    /// Subtracts the coordinates of another point.
    ///
    /// * `other` - The other point.
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Num + Copy> SubAssign for Point2<T> {
    /// Subtracts the coordinates of another point.
    ///
    /// * `other` - The other point.
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Num + Copy> Mul<T> for Point2<T> {
    type Output = Self;

    /// Scales the coordinates by a factor.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self {
        Self::new(self.x * f, self.y * f)
    }
}

impl<T: Num + Copy> MulAssign<T> for Point2<T> {
    /// Scales the coordinates by a factor.
    ///
    /// * `f` - The scaling factor.
    fn mul_assign(&mut self, f: T) {
        *self = *self * f;
    }
}

impl<T: Num + Copy> Div<T> for Point2<T> {
    type Output = Self;

    /// Scales the coordinates by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div(self, f: T) -> Self {
        debug_assert!(!f.is_zero());
        Self::new(self.x / f, self.y / f)
    }
}

impl<T: Num + Copy> DivAssign<T> for Point2<T> {
    /// Scales the coordinates by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div_assign(&mut self, f: T) {
        *self = *self / f;
    }
}

impl<T> Index<usize> for Point2<T> {
    type Output = T;

    /// Indexes the coordinates as [x, y].
    ///
    /// * `i` - The index.
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds (Point2)"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Point2<T> {
    /// Formats the point as [x, y].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_point() {
        assert!(Point2::new(0, 0) == Point2::zero());
        assert!(Point2::new(0.0, 0.0) == Point2::zero());
    }

    #[test]
    fn has_nans() {
        assert!(!Point2::new(0.0, 0.0).has_nans());
        assert!(Point2::new(f32::NAN, f32::NAN).has_nans());
    }

    #[test]
    #[should_panic]
    #[allow(unused)]
    fn invalid_index() {
        let p = Point2::<i32>::zero()[2];
    }

    fn point2_f32() -> impl Strategy<Value = Point2f> {
        (-100.0..100.0f32, -100.0..100.0f32).prop_map(|(x, y)| Point2::new(x, y))
    }

    proptest! {
        #[test]
        fn add_sub_roundtrip(p1 in point2_f32(), p2 in point2_f32()) {
            prop_assert_eq!(p1 + p2 - p2, Point2::new(p1.x + p2.x - p2.x, p1.y + p2.y - p2.y));
        }

        #[test]
        fn distance_squared_f32(p1 in point2_f32(), p2 in point2_f32()) {
            let expected = (p1.x - p2.x) * (p1.x - p2.x) + (p1.y - p2.y) * (p1.y - p2.y);
            prop_assert_eq!(p1.distance_squared(p2), expected);
        }

        #[test]
        fn distance_f32(p1 in point2_f32(), p2 in point2_f32()) {
            let expected = p1.distance_squared(p2).sqrt();
            prop_assert_eq!(p1.distance(p2), expected);
        }

        #[test]
        fn scale_by_factor(p in point2_f32(), f in 0.1..10.0f32) {
            prop_assert_eq!(p * f, Point2::new(p.x * f, p.y * f));
            prop_assert_eq!(p / f, Point2::new(p.x / f, p.y / f));
        }
    }
}
