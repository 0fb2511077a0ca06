use image::{RgbaImage, imageops};

/// Centers `image` on a transparent square canvas sized to its longer edge.
///
/// Pixels are copied as-is, so the source's own transparency survives and
/// nothing is stretched.
pub fn make_square(image: &RgbaImage) -> RgbaImage {
    let (w, h) = image.dimensions();
    if w == h {
        return image.clone();
    }

    let size = w.max(h);
    let mut canvas = RgbaImage::new(size, size);
    let x = (size - w) / 2;
    let y = (size - h) / 2;
    imageops::replace(&mut canvas, image, i64::from(x), i64::from(y));
    canvas
}
