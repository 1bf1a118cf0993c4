//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads the `index x T` sample table
//! 2. Aggregates observations per input value
//! 3. Writes the JSON report
//! 4. Optionally prints a text summary

use crate::aggregator::{aggregate_with, to_report, AggregationConfig};
use crate::output::{generate_text_summary, write_report};
use crate::parser::read_observations;
use crate::parser::schema::{DigitsFloor, PrecisionClass, SummaryReport};
use crate::utils::config::DEFAULT_SUMMARY_ROWS;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Sample table with `index x T` rows
    pub input: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Precision class; inferred from the file name when absent
    pub precision: Option<PrecisionClass>,

    /// Header lines to skip
    pub skip_rows: usize,

    /// Keep negative significant digits
    pub unbounded_digits: bool,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Rows shown in the text summary
    pub max_rows: usize,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("out_double.dat"),
            output_json: Some(PathBuf::from("summary.json")),
            precision: None,
            skip_rows: 0,
            unbounded_digits: false,
            print_summary: false,
            max_rows: DEFAULT_SUMMARY_ROWS,
        }
    }
}

impl AnalyzeArgs {
    /// Aggregation settings derived from the arguments
    pub fn aggregation_config(&self) -> Result<AggregationConfig> {
        let precision = resolve_precision(self.precision, &self.input)?;
        let floor = if self.unbounded_digits {
            DigitsFloor::Unbounded
        } else {
            DigitsFloor::Zero
        };
        Ok(AggregationConfig::new(precision).with_floor(floor))
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written (or would have been written)
///
/// # Errors
/// * Unreadable or malformed sample table
/// * Invalid samples (empty, NaN, infinite)
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<SummaryReport> {
    let start_time = Instant::now();

    let config = args.aggregation_config()?;
    info!(
        "Analyzing {} at {} precision",
        args.input.display(),
        config.precision
    );

    // Step 1: Load samples
    info!("Step 1/3: Loading samples...");
    let observations = read_observations(&args.input, args.skip_rows)
        .with_context(|| format!("Failed to load samples from {}", args.input.display()))?;

    debug!("Loaded {} observations", observations.len());

    // Step 2: Aggregate
    info!("Step 2/3: Aggregating {} observations...", observations.len());
    let groups = aggregate_with(&observations, &config)
        .with_context(|| format!("Failed to aggregate samples from {}", args.input.display()))?;

    info!("Built {} groups", groups.len());

    let report = to_report(
        groups,
        &config,
        Some(args.input.display().to_string()),
        observations.len(),
    );

    // Step 3: Write outputs
    if let Some(path) = &args.output_json {
        info!("Step 3/3: Writing report...");
        write_report(&report, path).context("Failed to write summary JSON")?;
        info!("✓ Report written to: {}", path.display());
    } else {
        info!("Step 3/3: Skipping JSON output (not requested)");
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("MCA SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Input:        {}", args.input.display());
        println!("Observations: {}", report.observation_count);
        println!("Groups:       {}", report.groups.len());
        println!("\n{}", generate_text_summary(&report, args.max_rows));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    if args.max_rows == 0 {
        anyhow::bail!("max_rows must be greater than 0");
    }

    resolve_precision(args.precision, &args.input)?;

    Ok(())
}

/// Explicit precision wins; otherwise infer from the file stem
///
/// **Private** - shared by validation and execution
fn resolve_precision(explicit: Option<PrecisionClass>, input: &Path) -> Result<PrecisionClass> {
    if let Some(precision) = explicit {
        return Ok(precision);
    }

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    PrecisionClass::infer_from_name(&stem).ok_or_else(|| {
        anyhow::anyhow!(
            "Cannot infer precision from '{}'; pass --precision single|double|extended",
            input.display()
        )
    })
}
