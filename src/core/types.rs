//! Core types for icon conversion settings and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Corner radius used when rounded corners are requested, as a fraction of
/// the canvas edge.
pub const DEFAULT_CORNER_RADIUS_RATIO: f32 = 0.18;

/// Configuration for converting one source image.
///
/// Missing fields in a settings file fall back to [`IconSettings::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IconSettings {
    /// Mask the icon with an anti-aliased rounded rectangle
    pub rounded_corners: bool,
    /// Corner radius as a fraction of the smaller canvas dimension (0.0-0.5)
    pub corner_radius_ratio: f32,
    /// Icon containers to produce, in order
    pub targets: Vec<IconTarget>,
    /// How `.icns` files are packed
    pub icns_backend: IcnsBackend,
    /// Directory for the produced icons; next to the source when unset
    pub output_dir: Option<PathBuf>,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            rounded_corners: true,
            corner_radius_ratio: DEFAULT_CORNER_RADIUS_RATIO,
            targets: vec![IconTarget::Icns, IconTarget::Ico],
            icns_backend: IcnsBackend::Auto,
            output_dir: None,
        }
    }
}

/// Output icon container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTarget {
    /// macOS icon family
    Icns,
    /// Windows icon
    Ico,
}

impl IconTarget {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Icns => "icns",
            Self::Ico => "ico",
        }
    }
}

/// Packaging strategy for `.icns` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IcnsBackend {
    /// `iconutil` on macOS, the built-in writer everywhere else
    #[default]
    Auto,
    /// Shell out to the macOS `iconutil` tool
    Iconutil,
    /// Write the container in-process
    Builtin,
}

impl IcnsBackend {
    /// Resolves [`IcnsBackend::Auto`] for the current platform.
    pub fn resolve(self) -> Self {
        match self {
            Self::Auto if cfg!(target_os = "macos") => Self::Iconutil,
            Self::Auto => Self::Builtin,
            concrete => concrete,
        }
    }
}

impl FromStr for IcnsBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "iconutil" => Ok(Self::Iconutil),
            "builtin" => Ok(Self::Builtin),
            other => Err(format!("Unknown icns backend: {other}")),
        }
    }
}

/// Result of converting one source file.
///
/// One result is produced per task whether or not the conversion succeeded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Path to the source image
    pub input_path: PathBuf,
    /// Icon files written for this source
    pub outputs: Vec<PathBuf>,
    /// Whether every requested target was written
    pub success: bool,
    /// Error message if the conversion failed
    pub error: Option<String>,
    /// Wall-clock time spent on this file in milliseconds
    pub elapsed_ms: u64,
}

impl ConversionResult {
    pub fn failed(input_path: PathBuf, error: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            input_path,
            outputs: Vec::new(),
            success: false,
            error: Some(error.into()),
            elapsed_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_file_fields_fall_back_to_defaults() {
        let settings: IconSettings =
            serde_json::from_str(r#"{ "roundedCorners": false, "targets": ["ico"] }"#).unwrap();
        assert!(!settings.rounded_corners);
        assert_eq!(settings.targets, vec![IconTarget::Ico]);
        assert_eq!(settings.corner_radius_ratio, DEFAULT_CORNER_RADIUS_RATIO);
        assert_eq!(settings.icns_backend, IcnsBackend::Auto);
    }

    #[test]
    fn auto_backend_resolves_per_platform() {
        let resolved = IcnsBackend::Auto.resolve();
        if cfg!(target_os = "macos") {
            assert_eq!(resolved, IcnsBackend::Iconutil);
        } else {
            assert_eq!(resolved, IcnsBackend::Builtin);
        }
        assert_eq!(IcnsBackend::Builtin.resolve(), IcnsBackend::Builtin);
    }
}
