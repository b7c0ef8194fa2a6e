use image::{ImageBuffer, Rgb, Rgba, RgbaImage};

/// Build an opaque square canvas blending `start` (top) into `end` (bottom).
pub fn vertical_gradient(size: u32, start: Rgb<u8>, end: Rgb<u8>) -> RgbaImage {
    ImageBuffer::from_fn(size, size, |_, y| row_color(start, end, y, size))
}

/// Colour of row `y` on a gradient of height `size`.
///
/// Channels are interpolated independently and truncated.
pub fn row_color(start: Rgb<u8>, end: Rgb<u8>, y: u32, size: u32) -> Rgba<u8> {
    let ratio = y as f32 / size as f32;
    let blend = |from: u8, to: u8| (from as f32 * (1.0 - ratio) + to as f32 * ratio) as u8;

    Rgba([
        blend(start[0], end[0]),
        blend(start[1], end[1]),
        blend(start[2], end[2]),
        255,
    ])
}
