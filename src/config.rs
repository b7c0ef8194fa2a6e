//! Values that drive the two pipelines.
//!
//! The defaults reproduce the shipped BrowseBack icon set. The render
//! settings can be overridden from a small JSON file.

use crate::error::IconError;
use anyhow::{Context, Result};
use image::Rgb;
use serde::Deserialize;
use std::{path::Path, str::FromStr};

/// Edge lengths required by the extension manifest.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Largest edge length either pipeline will allocate.
pub const MAX_ICON_SIZE: u32 = 1024;

/// Top of the background gradient (#667eea).
pub const DEFAULT_GRADIENT_START: Rgb<u8> = Rgb([102, 126, 234]);

/// Bottom of the background gradient (#8b5cf6).
pub const DEFAULT_GRADIENT_END: Rgb<u8> = Rgb([139, 92, 246]);

/// Corner radius as a fraction of the edge length.
pub const DEFAULT_CORNER_RATIO: f32 = 0.22;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub sizes: Vec<u32>,
    pub gradient_start: Rgb<u8>,
    pub gradient_end: Rgb<u8>,
    pub corner_ratio: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            gradient_start: DEFAULT_GRADIENT_START,
            gradient_end: DEFAULT_GRADIENT_END,
            corner_ratio: DEFAULT_CORNER_RATIO,
        }
    }
}

/// On-disk shape of a render configuration. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderConfigFile {
    sizes: Option<Vec<u32>>,
    gradient_start: Option<String>,
    gradient_end: Option<String>,
    corner_ratio: Option<f32>,
}

impl RenderConfig {
    /// Load overrides from a JSON file on top of the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let file: RenderConfigFile =
            serde_json::from_str(text).context("Config is not valid JSON")?;

        let mut config = Self::default();
        if let Some(sizes) = file.sizes {
            config.sizes = sizes;
        }
        if let Some(color) = file.gradient_start {
            config.gradient_start = parse_color(&color)?;
        }
        if let Some(color) = file.gradient_end {
            config.gradient_end = parse_color(&color)?;
        }
        if let Some(ratio) = file.corner_ratio {
            config.corner_ratio = ratio;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), IconError> {
        validate_sizes(&self.sizes)?;
        if !(0.0..=0.5).contains(&self.corner_ratio) {
            return Err(IconError::InvalidConfig(format!(
                "corner_ratio must be between 0 and 0.5, got {}",
                self.corner_ratio
            )));
        }
        Ok(())
    }

    /// Corner radius in whole pixels for the given edge length.
    pub fn corner_radius(&self, size: u32) -> u32 {
        (size as f32 * self.corner_ratio) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeConfig {
    pub sizes: Vec<u32>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

impl ResizeConfig {
    pub fn validate(&self) -> Result<(), IconError> {
        validate_sizes(&self.sizes)
    }
}

fn validate_sizes(sizes: &[u32]) -> Result<(), IconError> {
    if sizes.is_empty() {
        return Err(IconError::InvalidConfig(
            "at least one icon size is required".to_string(),
        ));
    }
    if sizes.contains(&0) {
        return Err(IconError::InvalidConfig(
            "icon sizes must be greater than zero".to_string(),
        ));
    }
    if let Some(size) = sizes.iter().find(|&&size| size > MAX_ICON_SIZE) {
        return Err(IconError::InvalidConfig(format!(
            "icon size {size} exceeds the maximum of {MAX_ICON_SIZE}"
        )));
    }
    Ok(())
}

/// Parse a CSS colour string (`#667eea`, `rgb(...)`, `purple`, ...).
pub fn parse_color(color: &str) -> Result<Rgb<u8>, IconError> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgb([
                (color.red * 255.).round() as u8,
                (color.green * 255.).round() as u8,
                (color.blue * 255.).round() as u8,
            ])
        })
        .map_err(|_| IconError::InvalidConfig(format!("unrecognised colour {color:?}")))
}
