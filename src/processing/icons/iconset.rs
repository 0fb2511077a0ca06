use std::path::{Path, PathBuf};
use image::{ImageFormat, RgbaImage};
use tracing::debug;
use crate::processing::imaging::render_icon;
use crate::utils::{IconError, IconResult};

/// One PNG inside an `.iconset` directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconsetEntry {
    /// File name `iconutil` expects for this slot
    pub file_name: &'static str,
    /// Edge length of the PNG in pixels
    pub pixel_size: u32,
    /// Element tag used for this slot inside an `.icns` container
    pub ostype: [u8; 4],
}

/// The ten slots of a complete macOS iconset, in packing order.
pub const ICONSET_ENTRIES: [IconsetEntry; 10] = [
    IconsetEntry { file_name: "icon_16x16.png", pixel_size: 16, ostype: *b"icp4" },
    IconsetEntry { file_name: "icon_16x16@2x.png", pixel_size: 32, ostype: *b"ic11" },
    IconsetEntry { file_name: "icon_32x32.png", pixel_size: 32, ostype: *b"icp5" },
    IconsetEntry { file_name: "icon_32x32@2x.png", pixel_size: 64, ostype: *b"ic12" },
    IconsetEntry { file_name: "icon_128x128.png", pixel_size: 128, ostype: *b"ic07" },
    IconsetEntry { file_name: "icon_128x128@2x.png", pixel_size: 256, ostype: *b"ic13" },
    IconsetEntry { file_name: "icon_256x256.png", pixel_size: 256, ostype: *b"ic08" },
    IconsetEntry { file_name: "icon_256x256@2x.png", pixel_size: 512, ostype: *b"ic14" },
    IconsetEntry { file_name: "icon_512x512.png", pixel_size: 512, ostype: *b"ic09" },
    IconsetEntry { file_name: "icon_512x512@2x.png", pixel_size: 1024, ostype: *b"ic10" },
];

/// Renders every iconset slot from `square` and writes the PNGs into `dir`.
///
/// Returns the written paths in [`ICONSET_ENTRIES`] order.
pub fn write_iconset(
    square: &RgbaImage,
    dir: &Path,
    corner_radius: Option<f32>,
) -> IconResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ICONSET_ENTRIES.len());

    for entry in &ICONSET_ENTRIES {
        let icon = render_icon(square, entry.pixel_size, corner_radius);
        let path = dir.join(entry.file_name);
        icon.save_with_format(&path, ImageFormat::Png)
            .map_err(|e| IconError::encode(format!("Failed to write {}: {e}", entry.file_name)))?;
        debug!("Wrote {} ({}px)", entry.file_name, entry.pixel_size);
        written.push(path);
    }

    Ok(written)
}
