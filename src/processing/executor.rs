//! Batch executor that converts source images one after another.
//!
//! Each file is converted inside a `tokio::task::spawn_blocking` call so the
//! async runtime is never blocked by resampling or PNG encoding. Files are
//! dispatched strictly in order and a failure on one file is recorded on its
//! result without stopping the batch.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::core::{ConversionResult, ConversionTask, IconTarget, Progress, ProgressType};
use crate::utils::{IconError, IconResult, extract_filename, output_path_for, validate_task};

use super::icons::{IcnsPackager, packager_for, write_icns, write_ico};
use super::imaging::{load_source, make_square};

/// Executor for a batch of conversion tasks.
#[derive(Default)]
pub struct IconExecutor {
    packager: Option<Arc<dyn IcnsPackager>>,
}

impl IconExecutor {
    /// Picks the icns packager from each task's settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `packager` for every `.icns` target regardless of task settings.
    pub fn with_packager(packager: Arc<dyn IcnsPackager>) -> Self {
        Self { packager: Some(packager) }
    }

    /// Converts all `tasks` sequentially, calling `on_progress` when a file
    /// starts and when it finishes.
    ///
    /// Always returns exactly one result per task, in task order.
    pub async fn execute_batch<F>(&self, tasks: &[ConversionTask], on_progress: F) -> Vec<ConversionResult>
    where
        F: Fn(Progress),
    {
        let total = tasks.len();
        let mut results = Vec::with_capacity(total);

        for (idx, task) in tasks.iter().enumerate() {
            let file_name = extract_filename(&task.input_path);
            on_progress(Progress::new(
                ProgressType::Start,
                idx,
                total,
                &file_name,
                format!("Processing: {file_name}"),
            ));

            let started = Instant::now();
            let task_clone = task.clone();
            let packager = self
                .packager
                .clone()
                .unwrap_or_else(|| packager_for(task.settings.icns_backend));

            let outcome = tokio::task::spawn_blocking(move || convert_file(&task_clone, packager.as_ref()))
                .await
                .unwrap_or_else(|e| Err(IconError::processing(format!("Task panicked: {e}"))));
            let elapsed_ms = started.elapsed().as_millis() as u64;
            let completed = idx + 1;

            match outcome {
                Ok(outputs) => {
                    let names: Vec<String> = outputs.iter().map(|p| extract_filename(p)).collect();
                    on_progress(
                        Progress::new(
                            ProgressType::Complete,
                            completed,
                            total,
                            &file_name,
                            format!("Generated: {}", names.join(", ")),
                        )
                        .with_outputs(outputs.clone()),
                    );
                    results.push(ConversionResult {
                        input_path: task.input_path.clone(),
                        outputs,
                        success: true,
                        error: None,
                        elapsed_ms,
                    });
                }
                Err(e) => {
                    let error_msg = e.to_string();
                    warn!("Conversion failed for {}: {}", task.input_path.display(), error_msg);
                    on_progress(
                        Progress::new(
                            ProgressType::Error,
                            completed,
                            total,
                            &file_name,
                            format!("Conversion failed: {file_name}"),
                        )
                        .with_error(error_msg.clone()),
                    );
                    results.push(ConversionResult::failed(task.input_path.clone(), error_msg, elapsed_ms));
                }
            }
        }

        let failed = results.iter().filter(|r| !r.success).count();
        if failed > 0 {
            warn!("Batch finished with {} failed files out of {}", failed, total);
        } else {
            info!("Batch finished: {} files converted", total);
        }
        results
    }
}

/// Converts one source file into every icon target in its settings.
///
/// Validation runs before anything is written, so a rejected task leaves
/// the filesystem untouched. Returns the written icon paths in target order.
pub fn convert_file(task: &ConversionTask, packager: &dyn IcnsPackager) -> IconResult<Vec<PathBuf>> {
    validate_task(task)?;

    let input = &task.input_path;
    let settings = &task.settings;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(dir) = &settings.output_dir {
        std::fs::create_dir_all(dir).map_err(|e| {
            IconError::io(format!("Cannot create output directory {}: {e}", dir.display()))
        })?;
    }

    let source = load_source(input)?;
    let square = make_square(&source);
    let corner_radius = settings
        .rounded_corners
        .then_some(settings.corner_radius_ratio);
    debug!(
        "Canvas {}px for '{}' (rounded corners: {})",
        square.width(),
        extract_filename(input),
        settings.rounded_corners
    );

    let mut outputs = Vec::with_capacity(settings.targets.len());
    for target in &settings.targets {
        let output = output_path_for(input, settings.output_dir.as_deref(), target.extension())?;
        match target {
            IconTarget::Icns => write_icns(&square, &stem, &output, corner_radius, packager)?,
            IconTarget::Ico => write_ico(&square, &output, corner_radius)?,
        }
        info!("Generated {}", output.display());
        outputs.push(output);
    }

    Ok(outputs)
}
