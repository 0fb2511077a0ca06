use serde::Serialize;
use std::path::PathBuf;

/// Progress message type
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProgressType {
    Start,
    Complete,
    Error,
}

/// Per-file status event emitted by the batch executor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Progress type (start, complete, error)
    pub progress_type: ProgressType,
    /// Number of files finished so far, including this one when it is done
    pub completed_tasks: usize,
    /// Total number of files in the batch
    pub total_tasks: usize,
    /// Progress percentage (0-100)
    pub progress_percentage: usize,
    /// Human readable status line
    pub status: String,
    /// Source file this event refers to
    pub file_name: String,
    /// Icons written, for completed files
    pub outputs: Vec<PathBuf>,
    /// Optional error message
    pub error: Option<String>,
}

impl Progress {
    /// Create a new Progress instance with basic information
    pub fn new(
        progress_type: ProgressType,
        completed_tasks: usize,
        total_tasks: usize,
        file_name: &str,
        status: impl Into<String>,
    ) -> Self {
        let progress_percentage = if total_tasks > 0 {
            (completed_tasks * 100) / total_tasks
        } else {
            0
        };

        Self {
            progress_type,
            completed_tasks,
            total_tasks,
            progress_percentage,
            status: status.into(),
            file_name: file_name.to_string(),
            outputs: Vec::new(),
            error: None,
        }
    }

    pub fn with_outputs(mut self, outputs: Vec<PathBuf>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}
