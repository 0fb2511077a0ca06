//! Anti-aliased rounded-corner masking.
//!
//! The mask is rasterised at [`SUPERSAMPLE`]x the target size as a hard
//! black/white rounded rectangle, then filtered down with Lanczos3 so the
//! curve ends up with soft edges at the final resolution.

use image::{GrayImage, Luma, RgbaImage, imageops};
use image::imageops::FilterType;
use super::canvas::make_square;

/// Supersampling factor for the mask.
pub const SUPERSAMPLE: u32 = 4;

/// Renders the rounded-rectangle coverage mask for a `width`×`height` image.
///
/// The radius is `radius_ratio` of the smaller supersampled dimension,
/// truncated to whole supersampled pixels. Ratios above 0.5 are capped.
pub fn rounded_corner_mask(width: u32, height: u32, radius_ratio: f32) -> GrayImage {
    let big_w = width * SUPERSAMPLE;
    let big_h = height * SUPERSAMPLE;
    let radius = (big_w.min(big_h) as f32 * radius_ratio.clamp(0.0, 0.5)).floor();

    let (w, h) = (big_w as f32, big_h as f32);
    let big = GrayImage::from_fn(big_w, big_h, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        // nearest point on the inner rectangle the corner arcs are centered on
        let cx = px.clamp(radius, w - radius);
        let cy = py.clamp(radius, h - radius);
        let (dx, dy) = (px - cx, py - cy);
        if dx * dx + dy * dy <= radius * radius {
            Luma([u8::MAX])
        } else {
            Luma([0])
        }
    });

    imageops::resize(&big, width, height, FilterType::Lanczos3)
}

/// Multiplies the alpha channel of `image` by the rounded-corner mask.
///
/// Non-square input is centered on a square canvas first. The resulting
/// alpha never exceeds the source alpha.
pub fn apply_rounded_corners(image: &RgbaImage, radius_ratio: f32) -> RgbaImage {
    let mut output = make_square(image);
    let (w, h) = output.dimensions();
    let mask = rounded_corner_mask(w, h, radius_ratio);

    for (pixel, coverage) in output.pixels_mut().zip(mask.pixels()) {
        let alpha = pixel[3];
        pixel[3] = multiply_alpha(alpha, coverage[0]);
    }
    output
}

/// Rounded `alpha * coverage / 255`, never above `alpha`.
fn multiply_alpha(alpha: u8, coverage: u8) -> u8 {
    let product = (u32::from(alpha) * u32::from(coverage) + 127) / 255;
    (product as u8).min(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn opaque_square_loses_corners_but_keeps_center() {
        let source = RgbaImage::from_pixel(128, 128, Rgba([30, 60, 90, 255]));
        let rounded = apply_rounded_corners(&source, 0.18);

        for (x, y) in [(0, 0), (127, 0), (0, 127), (127, 127), (2, 2), (125, 3)] {
            assert_eq!(rounded.get_pixel(x, y)[3], 0, "corner ({x}, {y})");
        }
        for (x, y) in [(64, 64), (64, 0), (0, 64), (127, 64), (64, 127)] {
            assert_eq!(rounded.get_pixel(x, y)[3], 255, "edge/center ({x}, {y})");
        }
        // color channels are left alone
        assert_eq!(&rounded.get_pixel(0, 0).0[..3], &[30, 60, 90]);
    }

    #[test]
    fn curve_is_anti_aliased() {
        let source = RgbaImage::from_pixel(128, 128, Rgba([255, 255, 255, 255]));
        let rounded = apply_rounded_corners(&source, 0.18);

        let partial = rounded
            .pixels()
            .filter(|p| p[3] > 0 && p[3] < 255)
            .count();
        assert!(partial > 0, "expected soft edge pixels along the curve");
    }

    #[test]
    fn alpha_never_exceeds_source_alpha() {
        let source = RgbaImage::from_fn(64, 64, |x, y| {
            Rgba([x as u8, y as u8, 0, ((x * 7 + y * 13) % 256) as u8])
        });
        let rounded = apply_rounded_corners(&source, 0.25);

        for (before, after) in source.pixels().zip(rounded.pixels()) {
            assert!(after[3] <= before[3]);
        }
    }

    #[test]
    fn multiply_alpha_rounds_and_never_raises_alpha() {
        assert_eq!(multiply_alpha(255, 255), 255);
        assert_eq!(multiply_alpha(255, 0), 0);
        assert_eq!(multiply_alpha(200, 128), 100);
        for alpha in 0..=u8::MAX {
            for coverage in 0..=u8::MAX {
                assert!(multiply_alpha(alpha, coverage) <= alpha);
            }
        }
    }

    #[test]
    fn zero_radius_keeps_alpha() {
        let source = RgbaImage::from_pixel(32, 32, Rgba([1, 2, 3, 200]));
        let rounded = apply_rounded_corners(&source, 0.0);
        assert!(rounded.pixels().all(|p| p[3] == 200));
    }

    #[test]
    fn non_square_input_is_squared_first() {
        let source = RgbaImage::from_pixel(40, 20, Rgba([0, 0, 0, 255]));
        let rounded = apply_rounded_corners(&source, 0.18);
        assert_eq!(rounded.dimensions(), (40, 40));
        assert_eq!(rounded.get_pixel(20, 2)[3], 0);
    }
}
