use std::path::Path;
use std::str::FromStr;
use crate::utils::{IconError, ValidationError};

/// Raster formats accepted as conversion sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    PNG,
    JPEG,
    BMP,
    GIF,
    WebP,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 5] = [
        Self::PNG,
        Self::JPEG,
        Self::BMP,
        Self::GIF,
        Self::WebP,
    ];

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::PNG => &["png"],
            Self::JPEG => &["jpg", "jpeg"],
            Self::BMP => &["bmp"],
            Self::GIF => &["gif"],
            Self::WebP => &["webp"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// The matching decoder format in the `image` crate.
    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            Self::PNG => image::ImageFormat::Png,
            Self::JPEG => image::ImageFormat::Jpeg,
            Self::BMP => image::ImageFormat::Bmp,
            Self::GIF => image::ImageFormat::Gif,
            Self::WebP => image::ImageFormat::WebP,
        }
    }
}

impl FromStr for SourceFormat {
    type Err = IconError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.matches_extension(ext))
            .ok_or_else(|| ValidationError::unsupported_format(format!(".{}", ext.to_lowercase())).into())
    }
}

/// Get the source format from a file's extension.
///
/// Only the extension is inspected; nothing is read from disk.
pub fn format_from_extension(path: &Path) -> Result<SourceFormat, IconError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| ValidationError::unsupported_format(
            format!("file has no extension: {}", path.display())
        ))?;

    SourceFormat::from_str(ext)
}
