use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Complex number used by the escape-time iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// |z|², used for bailout comparison without the square root.
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Euclidean magnitude |z|.
    pub fn abs(&self) -> f64 {
        self.norm_sqr().sqrt()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    // (a+bi)(c+di) = (ac - bd) + (ad + bc)i
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_is_componentwise() {
        let sum = Complex::new(1.0, 2.0) + Complex::new(3.0, 4.0);
        assert_eq!(sum, Complex::new(4.0, 6.0));
    }

    #[test]
    fn multiplication_follows_complex_product() {
        // (1+2i)(3+4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(product, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn squaring_matches_expansion() {
        // (a+bi)² = a² - b² + 2abi
        let z = Complex::new(2.0, -1.0);
        assert_eq!(z * z, Complex::new(3.0, -4.0));
    }

    #[test]
    fn abs_is_euclidean_norm() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.abs(), 5.0);
        assert_eq!(z.norm_sqr(), 25.0);
    }

    #[test]
    fn zero_has_zero_magnitude() {
        assert_eq!(Complex::ZERO.abs(), 0.0);
    }
}
