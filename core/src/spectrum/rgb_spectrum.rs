//! RGB Spectrum

#![allow(dead_code)]
use crate::math::*;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// A colour represented by red, green and blue coefficients.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBSpectrum {
    /// Red coefficient.
    pub r: Float,

    /// Green coefficient.
    pub g: Float,

    /// Blue coefficient.
    pub b: Float,
}

impl RGBSpectrum {
    /// Creates a new spectrum from coefficients.
    ///
    /// * `r` - Red coefficient.
    /// * `g` - Green coefficient.
    /// * `b` - Blue coefficient.
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    /// Creates a new spectrum with all coefficients set to one value.
    ///
    /// * `v` - The coefficient value.
    pub fn splat(v: Float) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a new black spectrum.
    pub fn black() -> Self {
        Self::default()
    }

    /// Returns true if all coefficients are zero.
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Returns true if any coefficient is NaN.
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// Returns a new spectrum with coefficients clamped to a range.
    ///
    /// * `low`  - Minimum coefficient value.
    /// * `high` - Maximum coefficient value.
    pub fn clamp(&self, low: Float, high: Float) -> Self {
        Self::new(
            clamp(self.r, low, high),
            clamp(self.g, low, high),
            clamp(self.b, low, high),
        )
    }

    /// Linearly interpolates towards another spectrum.
    ///
    /// * `t`     - The interpolation parameter.
    /// * `other` - The other spectrum.
    pub fn lerp(&self, t: Float, other: &Self) -> Self {
        Self::new(
            lerp(t, self.r, other.r),
            lerp(t, self.g, other.g),
            lerp(t, self.b, other.b),
        )
    }

    /// Returns the luminance of the spectrum.
    pub fn y(&self) -> Float {
        0.212671 * self.r + 0.715160 * self.g + 0.072169 * self.b
    }
}

impl Add for RGBSpectrum {
    type Output = Self;

    /// Adds the coefficients of another spectrum.
    ///
    /// * `other` - The other spectrum.
    fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBSpectrum {
    /// Adds the coefficients of another spectrum.
    ///
    /// * `other` - The other spectrum.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for RGBSpectrum {
    type Output = Self;

    /// Subtracts the coefficients of another spectrum.
    ///
    /// * `other` - The other spectrum.
    fn sub(self, other: Self) -> Self {
        Self::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

impl SubAssign for RGBSpectrum {
    /// Subtracts the coefficients of another spectrum.
    ///
    /// * `other` - The other spectrum.
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul for RGBSpectrum {
    type Output = Self;

    /// Modulates by another spectrum, coefficient-wise.
    ///
    /// * `other` - The other spectrum.
    fn mul(self, other: Self) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = Self;

    /// Scales the coefficients by a factor.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: Float) -> Self {
        Self::new(self.r * f, self.g * f, self.b * f)
    }
}

impl MulAssign<Float> for RGBSpectrum {
    /// Scales the coefficients by a factor.
    ///
    /// * `f` - The scaling factor.
    fn mul_assign(&mut self, f: Float) {
        *self = *self * f;
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = Self;

    /// Scales the coefficients by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div(self, f: Float) -> Self {
        debug_assert!(f != 0.0);
        Self::new(self.r / f, self.g / f, self.b / f)
    }
}

impl DivAssign<Float> for RGBSpectrum {
    /// Scales the coefficients by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div_assign(&mut self, f: Float) {
        *self = *self / f;
    }
}

impl From<Float> for RGBSpectrum {
    /// Creates a spectrum with all coefficients set to one value.
    ///
    /// * `v` - The coefficient value.
    fn from(v: Float) -> Self {
        Self::splat(v)
    }
}

impl fmt::Display for RGBSpectrum {
    /// Formats the spectrum as [r, g, b].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.r, self.g, self.b)
    }
}
