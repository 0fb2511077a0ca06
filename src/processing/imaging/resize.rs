use image::{RgbaImage, imageops};
use image::imageops::FilterType;
use super::mask::apply_rounded_corners;

/// Resamples a square canvas to `size`×`size` with Lanczos3.
pub fn resize_square(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.dimensions() == (size, size) {
        return image.clone();
    }
    imageops::resize(image, size, size, FilterType::Lanczos3)
}

/// Produces one iconset bitmap: resample, then mask at the final size when
/// a corner radius ratio is given.
pub fn render_icon(square: &RgbaImage, size: u32, corner_radius: Option<f32>) -> RgbaImage {
    let resized = resize_square(square, size);
    match corner_radius {
        Some(ratio) => apply_rounded_corners(&resized, ratio),
        None => resized,
    }
}
