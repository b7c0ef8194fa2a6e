use image::error::ImageError;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Everything that can stop one of the icon pipelines.
///
/// The pipelines only report *what* failed; the binaries decide how to
/// explain it to the user.
#[derive(Debug, Error)]
pub enum IconError {
    /// The resizer's source bitmap does not exist.
    #[error("source image {} not found", .path.display())]
    SourceNotFound { path: PathBuf },

    /// The image library has no codec for the requested format.
    #[error("no image codec available for {}: {reason}", .path.display())]
    CodecUnavailable { path: PathBuf, reason: String },

    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to process image {}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify an error coming out of the `image` crate.
    ///
    /// I/O failures keep their own variant so that a full disk is not
    /// reported as a corrupt image.
    pub(crate) fn image(path: impl Into<PathBuf>, source: ImageError) -> Self {
        let path = path.into();
        match source {
            ImageError::Unsupported(err) => IconError::CodecUnavailable {
                path,
                reason: err.to_string(),
            },
            ImageError::IoError(source) => IconError::Io { path, source },
            source => IconError::Image { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::error::{ImageFormatHint, UnsupportedError};

    #[test]
    fn unsupported_format_maps_to_codec_unavailable() {
        let err = ImageError::Unsupported(UnsupportedError::from(ImageFormatHint::Unknown));
        let mapped = IconError::image("icon.xyz", err);

        assert!(matches!(mapped, IconError::CodecUnavailable { .. }));
    }

    #[test]
    fn image_io_errors_stay_io() {
        let err = ImageError::IoError(io::Error::new(io::ErrorKind::Other, "disk full"));
        let mapped = IconError::image("icons/icon16.png", err);

        assert!(matches!(mapped, IconError::Io { .. }));
    }

    #[test]
    fn not_found_message_names_the_file() {
        let err = IconError::SourceNotFound {
            path: PathBuf::from("browseback.png"),
        };

        assert_eq!(err.to_string(), "source image browseback.png not found");
    }
}
