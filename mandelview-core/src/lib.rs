pub mod commands;
pub mod complex;
pub mod config;
pub mod transforms;
pub mod viewport;

pub use commands::{apply, Command};
pub use complex::Complex;
pub use config::{ViewerConfig, VIEWER_CONFIG};
pub use transforms::{pixel_to_point, sample_step};
pub use viewport::{Bounds, Direction, Viewport};
