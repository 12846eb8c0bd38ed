pub mod colorize;
pub mod mandelbrot;
pub mod renderer;

pub use colorize::{colorize, hsb_to_rgb};
pub use mandelbrot::{MandelbrotComputer, MandelbrotData};
pub use renderer::{MandelbrotRenderer, Renderer};

// Re-export core types for convenience
pub use mandelview_core::*;
