/// Pack an RGBA frame into the window's 0RGB u32 buffer.
///
/// Alpha is dropped; the surface is always opaque.
pub fn pack_rgba(frame: &[u8], buffer: &mut [u32]) {
    for (pixel, rgba) in buffer.iter_mut().zip(frame.chunks_exact(4)) {
        *pixel = (rgba[0] as u32) << 16 | (rgba[1] as u32) << 8 | rgba[2] as u32;
    }
}
