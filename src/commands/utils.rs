use crate::aggregator::check_report;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a summary JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;
    let problems = check_report(&report);

    if !problems.is_empty() {
        for problem in &problems {
            println!("  ✗ {}", problem);
        }
        anyhow::bail!("Report has {} problem(s)", problems.len());
    }

    println!("✓ Valid summary JSON");
    println!("  Version: {}", report.version);
    println!("  Precision: {} ({} bits, ceiling {:.3})", report.precision, report.bit_width, report.ceiling);
    println!("  Observations: {}", report.observation_count);
    println!("  Groups: {}", report.groups.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("MCA Digits Summary Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string             - Schema version (e.g., '1.0.0')");
        println!("  precision: string           - single | double | extended");
        println!("  bit_width: number           - Bits of the floating-point format");
        println!("  ceiling: number             - bit_width * log10(2)");
        println!("  digits_floor: string        - zero | unbounded");
        println!("  source: string?             - Sample table path");
        println!("  observation_count: number   - Observations aggregated");
        println!("  groups: array               - One entry per distinct x, ascending");
        println!("    x: number                 - Input value");
        println!("    mean: number              - Mean of T");
        println!("    stddev: number            - Population standard deviation of T");
        println!("    significant_digits: number - Stott Parker digits");
        println!("    sample_count: number      - Observations in the group");
        println!("  generated_at: string        - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("MCA Digits v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Significant-digits analysis for Monte-Carlo Arithmetic samples.");
}
