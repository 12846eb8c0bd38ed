use crate::complex::Complex;
use crate::viewport::Viewport;

/// Map a cursor pixel to its point on the complex plane.
///
/// Divides by the full pixel dimension. The render grid uses `sample_step`
/// (dimension - 1) instead; the two mappings are intentionally different and
/// both are preserved from the original navigation behavior.
pub fn pixel_to_point(px: u32, py: u32, viewport: &Viewport) -> Complex {
    let b = viewport.bounds();
    Complex::new(
        b.xmin + px as f64 * b.width() / viewport.width() as f64,
        b.ymin + py as f64 * b.height() / viewport.height() as f64,
    )
}

/// Per-axis plane distance between adjacent render samples.
///
/// Pixel (0, 0) samples (xmin, ymin) and pixel (width-1, height-1) samples
/// (xmax, ymax): the grid spans the bounds inclusively.
pub fn sample_step(viewport: &Viewport) -> (f64, f64) {
    let b = viewport.bounds();
    (
        b.width() / (viewport.width() - 1) as f64,
        b.height() / (viewport.height() - 1) as f64,
    )
}
