use std::borrow::Cow;
use std::path::Path;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use tracing::debug;
use crate::processing::imaging::{apply_rounded_corners, resize_square};
use crate::utils::{IconError, IconResult, atomic_write};

/// Sizes embedded in every `.ico`, largest first.
pub const ICO_SIZES: [u32; 9] = [256, 128, 64, 48, 40, 32, 24, 20, 16];

/// Builds a multi-resolution `.ico` from a square canvas.
///
/// The corners are masked once on the full canvas and every size is
/// resampled from that masked image.
pub fn encode_ico(square: &RgbaImage, corner_radius: Option<f32>) -> IconResult<Vec<u8>> {
    let source = match corner_radius {
        Some(ratio) => Cow::Owned(apply_rounded_corners(square, ratio)),
        None => Cow::Borrowed(square),
    };
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for size in ICO_SIZES {
        let icon = resize_square(&source, size);
        let image = IconImage::from_rgba_data(size, size, icon.into_raw());
        let entry = IconDirEntry::encode(&image)
            .map_err(|e| IconError::encode(format!("Failed to encode {size}px icon: {e}")))?;
        icon_dir.add_entry(entry);
    }

    let mut output = Vec::new();
    icon_dir
        .write(&mut output)
        .map_err(|e| IconError::encode(format!("Failed to write ICO data: {e}")))?;
    Ok(output)
}

/// Encodes and writes the `.ico` to `output`.
pub fn write_ico(square: &RgbaImage, output: &Path, corner_radius: Option<f32>) -> IconResult<()> {
    let data = encode_ico(square, corner_radius)?;
    debug!("Writing {} ({} bytes)", output.display(), data.len());
    atomic_write(output, &data)
}
