//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod histogram;
pub mod utils;

// Re-export main command functions
pub use analyze::{execute_analyze, validate_args, AnalyzeArgs};
pub use histogram::{execute_histogram, validate_histogram_args, HistogramArgs};
pub use utils::{display_schema, display_version, validate_report_file};
