use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};
use crate::utils::{IconError, IconResult};

/// Builds `<dir>/<stem>.<extension>` for a source file.
///
/// `dir` defaults to the directory holding the source.
pub fn output_path_for(input: &Path, output_dir: Option<&Path>, extension: &str) -> IconResult<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| IconError::io(format!("Invalid file name: {}", input.display())))?;

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    Ok(dir.join(format!("{stem}.{extension}")))
}

/// Get the file name component for status messages
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Creates a scratch `<stem>.iconset` directory in the system temp dir.
///
/// The directory and everything in it is removed when the guard is dropped.
pub fn create_iconset_dir(stem: &str) -> IconResult<TempDir> {
    tempfile::Builder::new()
        .prefix(&format!("{stem}-"))
        .suffix(".iconset")
        .tempdir()
        .map_err(|e| IconError::io(format!("Failed to create iconset directory: {e}")))
}

/// Writes `data` to `path` through a sibling temp file and a rename, so an
/// interrupted run never leaves a truncated icon behind.
pub fn atomic_write(path: &Path, data: &[u8]) -> IconResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(parent)
        .map_err(|e| IconError::io(format!("Failed to create temp file in {}: {e}", parent.display())))?;
    temp.write_all(data)
        .map_err(|e| IconError::io(format!("Failed to write temp file: {e}")))?;
    temp.persist(path)
        .map_err(|e| IconError::io(format!("Failed to replace {}: {}", path.display(), e.error)))?;
    Ok(())
}
