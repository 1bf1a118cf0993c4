//! Statistical aggregation of MCA samples.
//!
//! This module turns raw observations into:
//! - Per-input mean, standard deviation and significant digits
//! - Histograms of single-value stochastic rounding runs
//! - Versioned summary reports

pub mod histogram;
pub mod report;
pub mod significant_digits;

// Re-export main types and functions
pub use histogram::histogram;
pub use report::{check_report, to_report};
pub use significant_digits::{
    aggregate, aggregate_with, mean_and_stddev, significant_digits, AggregationConfig,
};
