//! Raster stages of the pipeline: decode, square, mask, resample.

mod canvas;
mod load;
mod mask;
mod resize;

pub use canvas::make_square;
pub use load::load_source;
pub use mask::{SUPERSAMPLE, apply_rounded_corners, rounded_corner_mask};
pub use resize::{render_icon, resize_square};
