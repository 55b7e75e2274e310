//! Complex number with f64 components.
//!
//! Values are immutable: every operation returns a new `Complex`. Non-finite
//! components (NaN, ±∞) propagate per IEEE 754; nothing here guards against
//! them.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Complex number `re + im·i` with f64 components.
///
/// A value with `im == 0` stays a `Complex`; there is no demotion to a plain
/// scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// Zero constant.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Multiplicative identity.
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Imaginary unit, i² = -1.
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Create from real/imaginary components.
    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Conjugate: same real part, negated imaginary part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Squared magnitude: |z|² = re² + im²
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Check if zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

/// Add two complex numbers: (a + bi) + (c + di) = (a + c) + (b + d)i
impl<T: Into<Complex>> Add<T> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: T) -> Complex {
        let other = other.into();
        Complex {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

/// Subtract other from self: (a + bi) - (c + di) = (a - c) + (b - d)i
impl<T: Into<Complex>> Sub<T> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: T) -> Complex {
        let other = other.into();
        Complex {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

/// Multiply two complex numbers: (a + bi)(c + di) = (ac - bd) + (ad + bc)i
impl<T: Into<Complex>> Mul<T> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, other: T) -> Complex {
        let other = other.into();
        Complex {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

/// Divide self by other, multiplying numerator and denominator by the
/// divisor's conjugate so the denominator `c² + d²` is real:
///
/// (a + bi)/(c + di) = (ac + bd)/(c² + d²) + ((bc - ad)/(c² + d²))i
///
/// A zero-modulus divisor is not guarded: the component divisions run as
/// written and yield NaN or ±∞ per IEEE 754.
impl<T: Into<Complex>> Div<T> for Complex {
    type Output = Complex;

    #[inline]
    fn div(self, other: T) -> Complex {
        let other = other.into();
        let denom = other.norm_sq();
        Complex {
            re: (self.re * other.re + self.im * other.im) / denom,
            im: (self.im * other.re - self.re * other.im) / denom,
        }
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex {
            re: -self.re,
            im: -self.im,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_componentwise() {
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, 2.0);
        assert_eq!(a + b, Complex::new(4.0, 6.0));
    }

    #[test]
    fn sub_preserves_operand_order() {
        let a = Complex::new(5.0, 7.0);
        let b = Complex::new(2.0, 3.0);
        assert_eq!(a - b, Complex::new(3.0, 4.0));
        assert_eq!(b - a, Complex::new(-3.0, -4.0));
    }

    #[test]
    fn mul_distributes_with_i_squared() {
        // (3 + 4i) * (1 + 2i) = 3 + 6i + 4i + 8i² = -5 + 10i
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, 2.0);
        assert_eq!(a * b, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn one_over_i_is_minus_i() {
        // 1/i = -i, i.e. i² = -1 through the division formula
        assert_eq!(Complex::ONE / Complex::I, Complex::new(0.0, -1.0));
    }

    #[test]
    fn conjugate_negates_imaginary_part() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.conjugate(), Complex::new(3.0, -4.0));
        assert_eq!(Complex::ZERO.conjugate(), Complex::ZERO);
    }

    #[test]
    fn norm_sq_of_3_4_is_25() {
        assert_eq!(Complex::new(3.0, 4.0).norm_sq(), 25.0);
    }

    #[test]
    fn neg_negates_both_components() {
        assert_eq!(-Complex::new(3.0, -4.0), Complex::new(-3.0, 4.0));
    }

    #[test]
    fn is_zero_requires_both_components() {
        assert!(Complex::ZERO.is_zero());
        assert!(!Complex::new(0.0, 1.0).is_zero());
        assert!(!Complex::new(1.0, 0.0).is_zero());
    }
}
