use crate::error::IconError;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// One icon written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
    /// Encoded file size.
    pub bytes: u64,
}

impl GeneratedIcon {
    pub fn kilobytes(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

/// File name the extension manifest expects for an icon of `size` pixels.
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

pub fn create_output_dir(dir: &Path) -> Result<(), IconError> {
    std::fs::create_dir_all(dir).map_err(|err| IconError::io(dir, err))
}

/// Encode `image` as a best-compression RGBA PNG at `path`, replacing any
/// existing file, and return the written icon.
pub fn save_icon(image: &RgbaImage, size: u32, path: &Path) -> Result<GeneratedIcon, IconError> {
    let file = File::create(path).map_err(|err| IconError::io(path, err))?;
    let mut out = BufWriter::new(file);
    write_png(image, &mut out).map_err(|err| IconError::image(path, err))?;
    out.flush().map_err(|err| IconError::io(path, err))?;

    let bytes = std::fs::metadata(path)
        .map_err(|err| IconError::io(path, err))?
        .len();
    tracing::debug!(size, bytes, path = %path.display(), "Wrote icon");

    Ok(GeneratedIcon {
        size,
        path: path.to_path_buf(),
        bytes,
    })
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image: &RgbaImage, w: W) -> image::ImageResult<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
}
