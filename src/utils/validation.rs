use std::path::Path;
use crate::core::{ConversionTask, IconSettings};
use crate::utils::{IconResult, ValidationError, format_from_extension};

/// Validates a conversion task before anything touches the disk.
pub fn validate_task(task: &ConversionTask) -> IconResult<()> {
    validate_input_path(&task.input_path)?;
    validate_settings(&task.settings)?;
    Ok(())
}

/// Validates the input file path and format
pub fn validate_input_path(path: &Path) -> IconResult<()> {
    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !path.is_file() {
        return Err(ValidationError::not_a_file(path).into());
    }

    // This will validate the extension and format
    format_from_extension(path)?;
    Ok(())
}

/// Validates conversion settings
pub fn validate_settings(settings: &IconSettings) -> IconResult<()> {
    let ratio = settings.corner_radius_ratio;
    if !ratio.is_finite() || !(0.0..=0.5).contains(&ratio) {
        return Err(ValidationError::settings(format!(
            "Invalid corner radius ratio: {ratio}. Must be between 0.0 and 0.5"
        ))
        .into());
    }

    if settings.targets.is_empty() {
        return Err(ValidationError::settings("No icon targets selected").into());
    }

    if let Some(dir) = &settings.output_dir {
        if dir.exists() && !dir.is_dir() {
            return Err(ValidationError::settings(format!(
                "Output path is not a directory: {}",
                dir.display()
            ))
            .into());
        }
    }

    Ok(())
}
