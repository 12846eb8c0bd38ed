use crate::transforms::pixel_to_point;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle of the complex plane.
///
/// x spans the real axis, y the imaginary axis. y increases downward on the
/// pixel surface, so the top pixel row samples ymin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Both axes strictly ordered. Diagnostic only: the navigation mutators
    /// never consult this, and repeated zoom-in can collapse f64 bounds.
    pub fn is_valid(&self) -> bool {
        self.xmin < self.xmax && self.ymin < self.ymax
    }
}

/// Pan direction on the pixel surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Region of the complex plane currently mapped onto the pixel surface.
///
/// Owns the mutable bounds, the immutable home bounds used by `reset`, and the
/// fixed pixel dimensions of the surface. All navigation operations mutate the
/// bounds in place and cannot fail; pixel inputs are in-range by construction
/// (the input layer only produces cursor positions inside the surface).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    bounds: Bounds,
    home: Bounds,
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(bounds: Bounds, width: u32, height: u32) -> Self {
        Self {
            bounds,
            home: bounds,
            width,
            height,
        }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Pixel width of the surface.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height of the surface.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Zoom in on the plane point under pixel (px, py): each axis range
    /// shrinks by `factor` and the new bounds are re-centered on that point.
    pub fn zoom_in(&mut self, px: u32, py: u32, factor: f64) {
        let center = pixel_to_point(px, py, self);
        let x_range = self.bounds.width() / factor;
        let y_range = self.bounds.height() / factor;

        self.bounds.xmin = center.re - x_range / 2.0;
        self.bounds.xmax = center.re + x_range / 2.0;
        self.bounds.ymin = center.im - y_range / 2.0;
        self.bounds.ymax = center.im + y_range / 2.0;
    }

    /// Zoom out around the plane point under pixel (px, py).
    ///
    /// The new half-range per side is `(range/factor) * 2`, so the total range
    /// becomes `4 * range / factor` — NOT the inverse of `zoom_in`. This
    /// asymmetry is intentional and must not be "fixed".
    pub fn zoom_out(&mut self, px: u32, py: u32, factor: f64) {
        let center = pixel_to_point(px, py, self);
        let x_range = self.bounds.width() / factor;
        let y_range = self.bounds.height() / factor;

        self.bounds.xmin = center.re - x_range * 2.0;
        self.bounds.xmax = center.re + x_range * 2.0;
        self.bounds.ymin = center.im - y_range * 2.0;
        self.bounds.ymax = center.im + y_range * 2.0;
    }

    /// Shift the view by `step_px` pixels worth of plane distance along one
    /// axis. Up moves toward smaller y (the view slides up on screen).
    pub fn pan(&mut self, direction: Direction, step_px: u32) {
        match direction {
            Direction::Left => {
                let dx = self.bounds.width() / self.width as f64 * step_px as f64;
                self.bounds.xmin -= dx;
                self.bounds.xmax -= dx;
            }
            Direction::Right => {
                let dx = self.bounds.width() / self.width as f64 * step_px as f64;
                self.bounds.xmin += dx;
                self.bounds.xmax += dx;
            }
            Direction::Up => {
                let dy = self.bounds.height() / self.height as f64 * step_px as f64;
                self.bounds.ymin -= dy;
                self.bounds.ymax -= dy;
            }
            Direction::Down => {
                let dy = self.bounds.height() / self.height as f64 * step_px as f64;
                self.bounds.ymin += dy;
                self.bounds.ymax += dy;
            }
        }
    }

    /// Restore the home bounds exactly.
    pub fn reset(&mut self) {
        self.bounds = self.home;
    }
}
