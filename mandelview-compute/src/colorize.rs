use crate::mandelbrot::MandelbrotData;

/// Convert hue/saturation/brightness to RGB bytes.
///
/// Hue is cyclic and wrapped into [0, 1); saturation and brightness are
/// expected in [0, 1].
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> [u8; 3] {
    if saturation == 0.0 {
        let v = (brightness * 255.0 + 0.5) as u8;
        return [v, v, v];
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    [
        (r * 255.0 + 0.5) as u8,
        (g * 255.0 + 0.5) as u8,
        (b * 255.0 + 0.5) as u8,
    ]
}

/// Map an iteration result to a display color.
///
/// Hue cycles with normalized escape speed at half saturation. Interior
/// points get zero brightness: the set itself is always black, the exterior
/// is banded by how fast each orbit escapes.
pub fn colorize(data: &MandelbrotData) -> [u8; 4] {
    if data.max_iterations == 0 {
        return [0, 0, 0, 255];
    }

    let hue = data.iterations as f32 / data.max_iterations as f32;
    let brightness = if data.escaped { 1.0 } else { 0.0 };
    let [r, g, b] = hsb_to_rgb(hue, 0.5, brightness);

    [r, g, b, 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(iterations: u32, max_iterations: u32) -> MandelbrotData {
        MandelbrotData {
            iterations,
            max_iterations,
            escaped: true,
        }
    }

    #[test]
    fn hsb_full_brightness_zero_saturation_is_white() {
        assert_eq!(hsb_to_rgb(0.3, 0.0, 1.0), [255, 255, 255]);
    }

    #[test]
    fn hsb_zero_brightness_is_black() {
        assert_eq!(hsb_to_rgb(0.7, 0.5, 0.0), [0, 0, 0]);
    }

    #[test]
    fn hsb_pure_red_at_hue_zero() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
    }

    #[test]
    fn hsb_hue_wraps_cyclically() {
        assert_eq!(hsb_to_rgb(1.25, 0.5, 1.0), hsb_to_rgb(0.25, 0.5, 1.0));
        assert_eq!(hsb_to_rgb(-0.5, 0.5, 1.0), hsb_to_rgb(0.5, 0.5, 1.0));
    }

    #[test]
    fn hsb_brightness_is_the_maximum_channel() {
        for i in 0..10 {
            let rgb = hsb_to_rgb(i as f32 / 10.0, 0.5, 1.0);
            let max = *rgb.iter().max().unwrap();
            assert_eq!(max, 255, "full brightness should peak a channel: {rgb:?}");
        }
    }

    #[test]
    fn interior_point_is_black() {
        let data = MandelbrotData {
            iterations: 100,
            max_iterations: 100,
            escaped: false,
        };
        assert_eq!(colorize(&data), [0, 0, 0, 255]);
    }

    #[test]
    fn instant_escape_is_half_saturated_red() {
        // hue 0, saturation 0.5, brightness 1.0
        assert_eq!(colorize(&escaped(0, 100)), [255, 128, 128, 255]);
    }

    #[test]
    fn halfway_escape_is_half_saturated_cyan() {
        // hue 0.5 lands in the cyan sextant
        assert_eq!(colorize(&escaped(50, 100)), [128, 255, 255, 255]);
    }

    #[test]
    fn escaped_points_are_never_black() {
        for n in 0..100 {
            let color = colorize(&escaped(n, 100));
            assert!(
                color[..3].iter().any(|&c| c > 0),
                "escaped at {n} rendered black"
            );
        }
    }

    #[test]
    fn handles_zero_max_iterations() {
        let data = MandelbrotData {
            iterations: 0,
            max_iterations: 0,
            escaped: true,
        };
        assert_eq!(colorize(&data), [0, 0, 0, 255]);
    }
}
