//! Sample table parsing and schema definitions.
//!
//! This module handles:
//! - Loading `index x T` tables and single-column sample files
//! - Defining the observation and report schema

pub mod sample_table;
pub mod schema;

// Re-export main types
pub use sample_table::{parse_observations, parse_sample_column, read_observations, read_sample_column};
pub use schema::{
    DigitsFloor, GroupSummary, HistogramBin, Observation, PrecisionClass, SampleHistogram,
    SummaryReport,
};
