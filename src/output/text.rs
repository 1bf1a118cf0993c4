//! Terminal text tables for reports and histograms.

use crate::parser::schema::{SampleHistogram, SummaryReport};

const BAR_WIDTH: usize = 40;

/// Render the per-input statistics as a text table
///
/// At most `max_rows` groups are listed; the footer reports how many were
/// left out and the lowest digits seen across all groups.
pub fn generate_text_summary(report: &SummaryReport, max_rows: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "  MCA SIGNIFICANT DIGITS ({} precision, ceiling {:.3})",
        report.precision, report.ceiling
    ));
    lines.push("  ┏━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━┳━━━━━━━┓".to_string());
    lines.push(format!(
        "  ┃ {:^20} ┃ {:^22} ┃ {:^12} ┃ {:^7} ┃ {:^5} ┃",
        "x", "mean", "stddev", "s", "n"
    ));
    lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━╋━━━━━━━┫".to_string());

    for group in report.groups.iter().take(max_rows) {
        lines.push(format!(
            "  ┃ {:>20.12} ┃ {:>22.15e} ┃ {:>12.4e} ┃ {:>7.3} ┃ {:>5} ┃",
            group.x, group.mean, group.stddev, group.significant_digits, group.sample_count
        ));
    }

    lines.push("  ┗━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━┻━━━━━━━┛".to_string());

    if report.groups.len() > max_rows {
        lines.push(format!("  ... {} more groups", report.groups.len() - max_rows));
    }

    if let Some(worst) = report
        .groups
        .iter()
        .min_by(|a, b| a.significant_digits.total_cmp(&b.significant_digits))
    {
        lines.push(format!(
            "  Lowest: {:.3} digits at x = {}",
            worst.significant_digits, worst.x
        ));
    }

    lines.join("\n")
}

/// Render a histogram as horizontal bars scaled to the fullest bin
pub fn generate_histogram_text(hist: &SampleHistogram) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "  SAMPLE HISTOGRAM ({} samples, range [{}, {}])",
        hist.sample_count, hist.min, hist.max
    ));

    let fullest = hist.bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);

    for bin in &hist.bins {
        let bar_len = bin.count * BAR_WIDTH / fullest;
        let percentage = bin.count as f64 / hist.sample_count.max(1) as f64 * 100.0;
        lines.push(format!(
            "  [{:>22.16}, {:>22.16}] {:<width$} {:>6} ({:>5.1}%)",
            bin.lower,
            bin.upper,
            "█".repeat(bar_len),
            bin.count,
            percentage,
            width = BAR_WIDTH
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{DigitsFloor, GroupSummary, HistogramBin, PrecisionClass};

    fn report_with_groups(count: usize) -> SummaryReport {
        let groups = (0..count)
            .map(|i| GroupSummary {
                x: i as f64,
                mean: 1.0,
                stddev: 0.001,
                significant_digits: 3.0 - i as f64 * 0.1,
                sample_count: 20,
            })
            .collect();

        SummaryReport {
            version: "1.0.0".to_string(),
            precision: PrecisionClass::Single,
            bit_width: 32,
            ceiling: PrecisionClass::Single.ceiling(),
            digits_floor: DigitsFloor::Zero,
            source: None,
            observation_count: count * 20,
            groups,
            generated_at: String::new(),
        }
    }

    #[test]
    fn test_summary_truncates_rows() {
        let text = generate_text_summary(&report_with_groups(5), 2);

        assert!(text.contains("single precision"));
        assert!(text.contains("... 3 more groups"));
        assert!(text.contains("Lowest: 2.600 digits at x = 4"));
    }

    #[test]
    fn test_histogram_text_bars() {
        let hist = SampleHistogram {
            min: 0.0,
            max: 1.0,
            sample_count: 4,
            bins: vec![
                HistogramBin { lower: 0.0, upper: 0.5, count: 1 },
                HistogramBin { lower: 0.5, upper: 1.0, count: 3 },
            ],
        };

        let text = generate_histogram_text(&hist);
        assert!(text.contains(&"█".repeat(BAR_WIDTH)));
        assert!(text.contains("75.0%"));
    }
}
