// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{ConversionResult, ConversionTask, IcnsBackend, IconSettings, IconTarget, Progress, ProgressType};
pub use processing::{IconExecutor, convert_file};
pub use utils::{IconError, IconResult};

// This library file is used as a public API for consuming this crate as a library.
// The command line entry point is in main.rs.
