use std::path::Path;
use image::RgbaImage;
use tracing::{debug, warn};
use crate::utils::{IconResult, create_iconset_dir};
use super::iconset::write_iconset;
use super::packager::IcnsPackager;

/// Renders a scratch iconset for `square` and packs it into `output`.
///
/// The scratch directory is removed whether or not packing succeeds.
pub fn write_icns(
    square: &RgbaImage,
    stem: &str,
    output: &Path,
    corner_radius: Option<f32>,
    packager: &dyn IcnsPackager,
) -> IconResult<()> {
    let iconset = create_iconset_dir(stem)?;
    let written = write_iconset(square, iconset.path(), corner_radius)?;
    debug!(
        "Iconset ready at {} ({} images), packing with {}",
        iconset.path().display(),
        written.len(),
        packager.name()
    );

    let packed = packager.pack(iconset.path(), output);

    let scratch = iconset.path().to_path_buf();
    if let Err(e) = iconset.close() {
        warn!("Failed to remove {}: {}", scratch.display(), e);
    }
    packed
}
