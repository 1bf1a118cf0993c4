//! Output writers for reports and histograms.
//!
//! This module handles writing data in various formats:
//! - JSON reports and histograms
//! - Text summaries for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_histogram, write_report};
pub use text::{generate_histogram_text, generate_text_summary};
