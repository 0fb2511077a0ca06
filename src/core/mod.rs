//! Core types shared by the pipeline and the command line front end.
//!
//! - [`IconSettings`]: Configuration for one conversion
//! - [`ConversionTask`]: A source file plus its settings
//! - [`ConversionResult`]: Outcome of converting one file
//! - [`Progress`]: Per-file status events for batch runs

mod types;
mod task;
mod progress;

pub use types::{
    ConversionResult, DEFAULT_CORNER_RADIUS_RATIO, IcnsBackend, IconSettings, IconTarget,
};
pub use task::ConversionTask;
pub use progress::{Progress, ProgressType};
