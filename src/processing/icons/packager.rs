//! Packing an `.iconset` directory into an `.icns` file.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;
use icns::{IconElement, IconFamily, OSType};
use tracing::{debug, warn};
use crate::core::IcnsBackend;
use crate::utils::{IconError, IconResult, atomic_write};
use super::iconset::ICONSET_ENTRIES;

/// Turns a populated iconset directory into an `.icns` file.
pub trait IcnsPackager: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    /// Packs `iconset_dir` into `output`.
    fn pack(&self, iconset_dir: &Path, output: &Path) -> IconResult<()>;
}

/// Returns the packager for a backend, resolving `Auto` for this platform.
pub fn packager_for(backend: IcnsBackend) -> Arc<dyn IcnsPackager> {
    match backend.resolve() {
        IcnsBackend::Iconutil => Arc::new(Iconutil::default()),
        _ => Arc::new(BuiltinPackager),
    }
}

/// Runs `iconutil -c icns <dir> -o <output>`.
///
/// Only the exit status and stderr of the tool are inspected.
pub struct Iconutil {
    program: OsString,
}

impl Iconutil {
    /// Uses a different executable in place of `iconutil`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for Iconutil {
    fn default() -> Self {
        Self::with_program("iconutil")
    }
}

impl IcnsPackager for Iconutil {
    fn name(&self) -> &str {
        "iconutil"
    }

    fn pack(&self, iconset_dir: &Path, output: &Path) -> IconResult<()> {
        debug!("Running {:?} on {}", self.program, iconset_dir.display());

        let result = Command::new(&self.program)
            .arg("-c")
            .arg("icns")
            .arg(iconset_dir)
            .arg("-o")
            .arg(output)
            .output()
            .map_err(|e| {
                IconError::packaging(format!(
                    "Failed to run {}: {e}",
                    self.program.to_string_lossy()
                ))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            warn!("iconutil exited with {}: {}", result.status, stderr);
            return Err(IconError::packaging(format!(
                "iconutil failed ({}): {}",
                result.status, stderr
            )));
        }

        Ok(())
    }
}

/// Writes the container directly from the iconset PNGs.
pub struct BuiltinPackager;

impl IcnsPackager for BuiltinPackager {
    fn name(&self) -> &str {
        "builtin"
    }

    fn pack(&self, iconset_dir: &Path, output: &Path) -> IconResult<()> {
        let mut family = IconFamily::new();
        for entry in &ICONSET_ENTRIES {
            let path = iconset_dir.join(entry.file_name);
            let png = std::fs::read(&path).map_err(|e| {
                IconError::packaging(format!("Missing iconset entry {}: {e}", entry.file_name))
            })?;
            family.elements.push(IconElement::new(OSType(entry.ostype), png));
        }

        let mut data = Vec::with_capacity(family.total_length() as usize);
        family
            .write(&mut data)
            .map_err(|e| IconError::packaging(format!("Failed to encode icns container: {e}")))?;
        debug!(
            "Packed {} elements ({} bytes) for {}",
            family.elements.len(),
            data.len(),
            output.display()
        );
        atomic_write(output, &data)
    }
}
