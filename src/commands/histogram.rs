//! Histogram command implementation.
//!
//! Bins a single column of stochastic rounding samples and prints the
//! distribution, optionally saving it as JSON.

use crate::aggregator::histogram;
use crate::output::{generate_histogram_text, write_histogram};
use crate::parser::read_sample_column;
use crate::parser::schema::SampleHistogram;
use crate::utils::config::{DEFAULT_HISTOGRAM_BINS, DEFAULT_SAMPLE_SKIP_ROWS, MAX_HISTOGRAM_BINS};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the histogram command
#[derive(Debug, Clone)]
pub struct HistogramArgs {
    /// Single-column sample file
    pub input: PathBuf,

    /// Output path for the JSON histogram (optional)
    pub output_json: Option<PathBuf>,

    pub bins: usize,

    /// Header lines to skip
    pub skip_rows: usize,
}

impl Default for HistogramArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("out_one.dat"),
            output_json: None,
            bins: DEFAULT_HISTOGRAM_BINS,
            skip_rows: DEFAULT_SAMPLE_SKIP_ROWS,
        }
    }
}

/// Execute the histogram command
pub fn execute_histogram(args: HistogramArgs) -> Result<SampleHistogram> {
    info!("Binning {} into {} bins", args.input.display(), args.bins);

    let samples = read_sample_column(&args.input, args.skip_rows)
        .with_context(|| format!("Failed to load samples from {}", args.input.display()))?;

    let hist = histogram(&samples, args.bins)
        .with_context(|| format!("Failed to bin samples from {}", args.input.display()))?;

    if let Some(path) = &args.output_json {
        write_histogram(&hist, path).context("Failed to write histogram JSON")?;
        info!("✓ Histogram written to: {}", path.display());
    }

    println!("{}", generate_histogram_text(&hist));

    Ok(hist)
}

/// Validate histogram arguments
pub fn validate_histogram_args(args: &HistogramArgs) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    if args.bins == 0 {
        anyhow::bail!("bins must be greater than 0");
    }

    if args.bins > MAX_HISTOGRAM_BINS {
        anyhow::bail!("bins is too large (max {})", MAX_HISTOGRAM_BINS);
    }

    Ok(())
}
