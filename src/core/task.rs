//! Conversion task definition.

use std::path::PathBuf;
use crate::core::IconSettings;

/// Represents a single icon conversion task.
///
/// Contains the source path and the settings used to convert it.
#[derive(Debug, Clone)]
pub struct ConversionTask {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Conversion settings (corners, targets, packaging)
    pub settings: IconSettings,
}

impl ConversionTask {
    pub fn new(input_path: impl Into<PathBuf>, settings: IconSettings) -> Self {
        Self {
            input_path: input_path.into(),
            settings,
        }
    }

    /// Builds one task per path, all sharing the same settings.
    pub fn batch<I, P>(paths: I, settings: &IconSettings) -> Vec<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        paths
            .into_iter()
            .map(|path| Self::new(path, settings.clone()))
            .collect()
    }
}
