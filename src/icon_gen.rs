use crate::{
    config::RenderConfig,
    error::IconError,
    gradient::vertical_gradient,
    mask::rounded_rect_mask,
    motif::{draw_motif, Detail},
    output::{create_output_dir, icon_file_name, save_icon, GeneratedIcon},
};
use image::{GrayImage, ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Render every configured size into `out_dir`, overwriting existing icons.
///
/// Stops at the first size that fails; icons written before it stay on disk.
pub fn generate_icons(
    config: &RenderConfig,
    out_dir: &Path,
) -> Result<Vec<GeneratedIcon>, IconError> {
    config.validate()?;
    create_output_dir(out_dir)?;

    println!("Generating BrowseBack icons...");
    let mut icons = Vec::with_capacity(config.sizes.len());

    for &size in &config.sizes {
        let filename = icon_file_name(size);
        let output_path = out_dir.join(&filename);

        println!("  Creating {filename} ({size}x{size})...");
        let icon = create_icon(size, config);
        icons.push(save_icon(&icon, size, &output_path)?);
        println!("  ✓ Saved to {}", output_path.display());
    }

    Ok(icons)
}

/// Build one finished icon: masked gradient with the emblem on top.
pub fn create_icon(size: u32, config: &RenderConfig) -> RgbaImage {
    let radius = config.corner_radius(size);
    tracing::debug!(size, radius, detail = ?Detail::for_size(size), "Rendering icon");

    let background = vertical_gradient(size, config.gradient_start, config.gradient_end);
    let mask = rounded_rect_mask(size, radius);
    let mut icon = apply_mask(&background, &mask);

    draw_motif(&mut icon, size);
    icon
}

/// Copy `image` onto a transparent canvas wherever `mask` is non-zero.
///
/// The mask value scales the source alpha, so a binary mask either keeps a
/// pixel as is or clears it.
pub fn apply_mask(image: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    let (width, height) = image.dimensions();

    ImageBuffer::from_fn(width, height, |x, y| {
        let coverage = mask.get_pixel(x, y)[0] as u16;
        if coverage == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
        Rgba([r, g, b, (a as u16 * coverage / 255) as u8])
    })
}
