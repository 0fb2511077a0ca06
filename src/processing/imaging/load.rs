use std::path::Path;
use image::{ImageReader, RgbaImage};
use tracing::debug;
use crate::utils::{IconError, IconResult, extract_filename, format_from_extension};

/// Decodes a source image into an RGBA buffer.
///
/// The decoder is chosen from the file contents; the extension is only used
/// when the contents are not recognised.
pub fn load_source(path: &Path) -> IconResult<RgbaImage> {
    let format = format_from_extension(path)?;

    let mut reader = ImageReader::open(path)
        .map_err(|e| IconError::io(format!("Cannot open '{}': {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| IconError::io(format!("Cannot read '{}': {e}", path.display())))?;
    if reader.format().is_none() {
        reader.set_format(format.image_format());
    }

    let image = reader
        .decode()
        .map_err(|e| IconError::decode(format!("Failed to decode '{}': {e}", path.display())))?
        .into_rgba8();

    if image.width() == 0 || image.height() == 0 {
        return Err(IconError::decode(format!(
            "Image has no pixels: {}",
            path.display()
        )));
    }

    debug!(
        "Loaded '{}': {}×{}",
        extract_filename(path),
        image.width(),
        image.height()
    );
    Ok(image)
}
