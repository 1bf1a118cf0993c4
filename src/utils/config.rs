//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Bit widths backing each precision class.
// Extended maps to the x87 80-bit format; wider formats share this ceiling.
pub const SINGLE_BIT_WIDTH: u32 = 32;
pub const DOUBLE_BIT_WIDTH: u32 = 64;
pub const EXTENDED_BIT_WIDTH: u32 = 80;

/// Histogram bins used by the stochastic rounding plots
pub const DEFAULT_HISTOGRAM_BINS: usize = 2;

/// Single-column sample files start with a one-line header ("x")
pub const DEFAULT_SAMPLE_SKIP_ROWS: usize = 1;

pub const MAX_HISTOGRAM_BINS: usize = 10_000;

/// Rows printed by the text summary unless overridden
pub const DEFAULT_SUMMARY_ROWS: usize = 25;

/// Comment marker in sample tables
pub const COMMENT_MARKER: char = '#';
