use mandelview_core::Complex;
use serde::{Deserialize, Serialize};

/// Squared bailout radius: the orbit has escaped once |z| > 2.
const BAILOUT_RADIUS_SQ: f64 = 4.0;

/// Iteration result for a single point.
///
/// Carries max_iterations so the colorizer can normalize without extra
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandelbrotData {
    /// Iteration index at escape, or max_iterations for interior points.
    pub iterations: u32,
    /// Iteration cap used for this computation.
    pub max_iterations: u32,
    /// Whether the orbit escaped the bailout radius.
    pub escaped: bool,
}

/// Escape-time evaluation of the Mandelbrot iteration z ← z² + c.
#[derive(Debug, Clone)]
pub struct MandelbrotComputer {
    max_iterations: u32,
}

impl MandelbrotComputer {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Iterate z ← z² + c from z = 0 until escape or the iteration cap.
    ///
    /// The escape test runs after each update, so a point with |c| > 2
    /// reports 0 iterations.
    pub fn iterate(&self, c: Complex) -> MandelbrotData {
        let mut z = Complex::ZERO;

        for n in 0..self.max_iterations {
            z = z * z + c;
            if z.norm_sqr() > BAILOUT_RADIUS_SQ {
                return MandelbrotData {
                    iterations: n,
                    max_iterations: self.max_iterations,
                    escaped: true,
                };
            }
        }

        MandelbrotData {
            iterations: self.max_iterations,
            max_iterations: self.max_iterations,
            escaped: false,
        }
    }
}
