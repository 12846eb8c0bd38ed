mod framebuffer;
mod input;

use anyhow::Result;
use log::{debug, info};
use mandelview_compute::MandelbrotRenderer;
use mandelview_core::{apply, Viewport, VIEWER_CONFIG};
use minifb::{Key, Window, WindowOptions};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let config = VIEWER_CONFIG;
    let mut viewport = config.default_viewport();
    let renderer = MandelbrotRenderer::new(config.max_iterations);

    let width = config.width as usize;
    let height = config.height as usize;
    let mut buffer = vec![0u32; width * height];

    let mut window = Window::new(
        "Mandelbrot - scroll to zoom, arrows to pan, space to reset",
        width,
        height,
        WindowOptions::default(),
    )?;
    window.set_target_fps(60);

    info!(
        "viewer started: {}x{} surface, {} max iterations",
        config.width, config.height, config.max_iterations
    );

    redraw(&renderer, &viewport, &mut buffer);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let commands = input::poll(&window);

        if !commands.is_empty() {
            for command in commands {
                debug!("applying {command:?}");
                apply(&mut viewport, command, &config);
            }
            redraw(&renderer, &viewport, &mut buffer);
        }

        window.update_with_buffer(&buffer, width, height)?;
    }

    Ok(())
}

/// Recompute the full frame for the current viewport.
fn redraw(renderer: &MandelbrotRenderer, viewport: &Viewport, buffer: &mut [u32]) {
    let started = Instant::now();
    let frame = renderer.render_rgba(viewport);
    framebuffer::pack_rgba(&frame, buffer);
    debug!(
        "rendered {:?} in {} ms",
        viewport.bounds(),
        started.elapsed().as_millis()
    );
}
