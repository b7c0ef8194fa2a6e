use image::{GrayImage, ImageBuffer, Luma};

pub const OPAQUE: u8 = 255;
pub const TRANSPARENT: u8 = 0;

/// Build a rounded-rectangle stencil covering the whole `size`×`size` canvas.
///
/// A pixel is opaque when its centre lies within `radius` of the canvas
/// rectangle shrunk by `radius` on every side. The radius is capped at half
/// the edge, which turns the silhouette into a circle.
pub fn rounded_rect_mask(size: u32, radius: u32) -> GrayImage {
    let extent = size as f32;
    let radius = (radius as f32).min(extent / 2.0);

    ImageBuffer::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let dx = px - px.clamp(radius, extent - radius);
        let dy = py - py.clamp(radius, extent - radius);

        if dx * dx + dy * dy <= radius * radius {
            Luma([OPAQUE])
        } else {
            Luma([TRANSPARENT])
        }
    })
}
