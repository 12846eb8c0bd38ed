use crate::colorize::colorize;
use crate::mandelbrot::{MandelbrotComputer, MandelbrotData};
use mandelview_core::{sample_step, Complex, Viewport};

/// Full-frame renderer over an immutable viewport snapshot.
pub trait Renderer {
    type Data;

    /// Compute per-pixel data for every pixel of the surface, row-major.
    fn render(&self, viewport: &Viewport) -> Vec<Self::Data>;
}

/// Escape-time Mandelbrot renderer.
///
/// Recomputes every pixel on each call; there is no partial-update path.
/// Pixel (j, i) samples the plane at (xmin + j·xstep, ymin + i·ystep).
pub struct MandelbrotRenderer {
    computer: MandelbrotComputer,
}

impl MandelbrotRenderer {
    pub fn new(max_iterations: u32) -> Self {
        Self {
            computer: MandelbrotComputer::new(max_iterations),
        }
    }

    /// Render and colorize into a width×height×4 RGBA frame.
    pub fn render_rgba(&self, viewport: &Viewport) -> Vec<u8> {
        let data = self.render(viewport);
        let mut frame = Vec::with_capacity(data.len() * 4);
        for point in &data {
            frame.extend_from_slice(&colorize(point));
        }
        frame
    }
}

impl Renderer for MandelbrotRenderer {
    type Data = MandelbrotData;

    fn render(&self, viewport: &Viewport) -> Vec<MandelbrotData> {
        let (xstep, ystep) = sample_step(viewport);
        let bounds = *viewport.bounds();

        (0..viewport.height())
            .flat_map(|py| {
                (0..viewport.width()).map(move |px| {
                    let c = Complex::new(
                        bounds.xmin + px as f64 * xstep,
                        bounds.ymin + py as f64 * ystep,
                    );
                    self.computer.iterate(c)
                })
            })
            .collect()
    }
}
