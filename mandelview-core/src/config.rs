//! Viewer configuration.
//!
//! All parameters are fixed policy for this viewer: surface size, iteration
//! cap, and navigation step sizes live in one const rather than being
//! threaded through as loose numbers.

use crate::viewport::{Bounds, Viewport};
use serde::{Deserialize, Serialize};

/// Fixed parameters of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Pixel width of the surface.
    pub width: u32,
    /// Pixel height of the surface.
    pub height: u32,
    /// Escape-time iteration cap.
    pub max_iterations: u32,
    /// Range shrink factor per zoom-in step.
    pub zoom_factor: f64,
    /// Pan distance in pixels per arrow press.
    pub pan_step: u32,
    /// Bounds shown at startup and restored by reset.
    pub home: Bounds,
}

impl ViewerConfig {
    /// Create the startup viewport for this configuration.
    pub fn default_viewport(&self) -> Viewport {
        Viewport::new(self.home, self.width, self.height)
    }
}

/// Canonical configuration: 1000x1000 surface over [-2, 1] x [-1.5, 1.5]
/// at 100 iterations.
pub const VIEWER_CONFIG: ViewerConfig = ViewerConfig {
    width: 1000,
    height: 1000,
    max_iterations: 100,
    zoom_factor: 2.0,
    pan_step: 100,
    home: Bounds {
        xmin: -2.0,
        xmax: 1.0,
        ymin: -1.5,
        ymax: 1.5,
    },
};

impl Default for ViewerConfig {
    fn default() -> Self {
        VIEWER_CONFIG
    }
}
