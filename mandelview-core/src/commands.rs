use crate::config::ViewerConfig;
use crate::viewport::{Direction, Viewport};

/// Navigation commands produced by the input layer.
///
/// Zoom commands carry the cursor pixel they are anchored on; the input layer
/// only emits positions inside the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ZoomIn(u32, u32),
    ZoomOut(u32, u32),
    Pan(Direction),
    Reset,
}

/// Apply a navigation command to the viewport.
///
/// Single mutation seam between input events and viewport state; the caller
/// owns the redraw that follows.
pub fn apply(viewport: &mut Viewport, command: Command, config: &ViewerConfig) {
    match command {
        Command::ZoomIn(px, py) => viewport.zoom_in(px, py, config.zoom_factor),
        Command::ZoomOut(px, py) => viewport.zoom_out(px, py, config.zoom_factor),
        Command::Pan(direction) => viewport.pan(direction, config.pan_step),
        Command::Reset => viewport.reset(),
    }
}
