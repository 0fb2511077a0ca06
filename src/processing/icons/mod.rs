//! Icon exporters.
//!
//! - `iconset`: the ten PNG slots of a macOS iconset
//! - `packager`: turns an iconset into `.icns` (`iconutil` or built-in)
//! - `icns_file`: render, pack and clean up in one call
//! - `ico_file`: multi-resolution Windows icons

mod icns_file;
mod ico_file;
mod iconset;
mod packager;

pub use icns_file::write_icns;
pub use ico_file::{ICO_SIZES, encode_ico, write_ico};
pub use iconset::{ICONSET_ENTRIES, IconsetEntry, write_iconset};
pub use packager::{BuiltinPackager, IcnsPackager, Iconutil, packager_for};
