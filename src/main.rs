//! MCA Digits CLI
//!
//! Summarizes Monte-Carlo Arithmetic sample tables: per-input mean,
//! standard deviation and significant digits, plus sample histograms.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use mca_digits::commands::{
    display_schema, display_version, execute_analyze, execute_histogram, validate_args,
    validate_histogram_args, validate_report_file, AnalyzeArgs, HistogramArgs,
};
use mca_digits::parser::PrecisionClass;
use mca_digits::utils::config::{DEFAULT_HISTOGRAM_BINS, DEFAULT_SAMPLE_SKIP_ROWS, DEFAULT_SUMMARY_ROWS};

/// MCA Digits - significant-digits analysis for MCA samples
#[derive(Parser, Debug)]
#[command(name = "mca-digits")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate an `index x T` sample table
    Analyze {
        /// Sample table to analyze
        #[arg(short, long)]
        input: PathBuf,

        /// Precision of the samples (single, double, extended); inferred from the file name if omitted
        #[arg(short, long)]
        precision: Option<PrecisionClass>,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "summary.json")]
        output: PathBuf,

        /// Skip writing the JSON report
        #[arg(long)]
        no_json: bool,

        /// Header lines to skip
        #[arg(long, default_value = "0")]
        skip_rows: usize,

        /// Keep negative significant digits instead of clamping at zero
        #[arg(long)]
        unbounded_digits: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Rows shown in the text summary
        #[arg(long, default_value_t = DEFAULT_SUMMARY_ROWS)]
        max_rows: usize,
    },

    /// Histogram a single column of stochastic samples
    Histogram {
        /// Sample file (one value per line)
        #[arg(short, long)]
        input: PathBuf,

        /// Number of equal-width bins
        #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
        bins: usize,

        /// Header lines to skip
        #[arg(long, default_value_t = DEFAULT_SAMPLE_SKIP_ROWS)]
        skip_rows: usize,

        /// Output path for the JSON histogram (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a summary JSON file
    Validate {
        /// Path to summary JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze {
            input,
            precision,
            output,
            no_json,
            skip_rows,
            unbounded_digits,
            summary,
            max_rows,
        } => {
            let args = AnalyzeArgs {
                input,
                output_json: if no_json { None } else { Some(output) },
                precision,
                skip_rows,
                unbounded_digits,
                print_summary: summary,
                max_rows,
            };

            validate_args(&args)?;
            execute_analyze(args)?;
        }

        Commands::Histogram {
            input,
            bins,
            skip_rows,
            output,
        } => {
            let args = HistogramArgs {
                input,
                output_json: output,
                bins,
                skip_rows,
            };

            validate_histogram_args(&args)?;
            execute_histogram(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
