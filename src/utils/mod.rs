pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{IconError, IconResult, PathError, ValidationError};
pub use validation::{validate_input_path, validate_settings, validate_task};
pub use formats::{SourceFormat, format_from_extension};
pub use fs::{atomic_write, create_iconset_dir, extract_filename, output_path_for};
