use crate::{
    config::ResizeConfig,
    error::IconError,
    output::{create_output_dir, icon_file_name, save_icon, GeneratedIcon},
};
use image::{imageops::FilterType, io::Reader as ImageReader, ColorType, ImageFormat};
use std::path::Path;

/// What was found in the source bitmap before it was normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    pub width: u32,
    pub height: u32,
    pub format: Option<ImageFormat>,
    pub color: ColorType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeReport {
    pub source: SourceInfo,
    pub icons: Vec<GeneratedIcon>,
}

/// Resample `input` to every configured size and write the results into
/// `out_dir`.
///
/// The output is always square; the source aspect ratio is not preserved.
/// A missing source is reported before anything is created on disk.
pub fn resize_icon(
    input: &Path,
    out_dir: &Path,
    config: &ResizeConfig,
) -> Result<ResizeReport, IconError> {
    config.validate()?;
    if !input.is_file() {
        return Err(IconError::SourceNotFound {
            path: input.to_path_buf(),
        });
    }

    println!("Opening {}...", input.display());
    let reader = ImageReader::open(input)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| IconError::io(input, err))?;
    let format = reader.format();
    let original = reader.decode().map_err(|err| IconError::image(input, err))?;

    let source = SourceInfo {
        width: original.width(),
        height: original.height(),
        format,
        color: original.color(),
    };
    println!("  Original size: {}x{}", source.width, source.height);
    println!("  Format: {:?}, Mode: {:?}", source.format, source.color);

    let rgba = original.into_rgba8();
    create_output_dir(out_dir)?;

    let mut icons = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let output_path = out_dir.join(icon_file_name(size));

        println!("\nCreating {size}x{size} icon...");
        tracing::debug!(size, from = ?(source.width, source.height), "Resampling with Lanczos3");
        let resized = image::imageops::resize(&rgba, size, size, FilterType::Lanczos3);
        let icon = save_icon(&resized, size, &output_path)?;

        println!("  ✓ Saved to {}", output_path.display());
        println!("  File size: {:.1} KB", icon.kilobytes());
        icons.push(icon);
    }

    Ok(ResizeReport { source, icons })
}
