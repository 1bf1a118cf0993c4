//! Assemble and re-check the summary report.

use super::significant_digits::AggregationConfig;
use crate::parser::schema::{DigitsFloor, GroupSummary, SummaryReport};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;

/// Wrap aggregated groups into a versioned, timestamped report
///
/// **Public** - called by the analyze command before writing JSON
pub fn to_report(
    groups: Vec<GroupSummary>,
    config: &AggregationConfig,
    source: Option<String>,
    observation_count: usize,
) -> SummaryReport {
    SummaryReport {
        version: SCHEMA_VERSION.to_string(),
        precision: config.precision,
        bit_width: config.precision.bit_width(),
        ceiling: config.ceiling(),
        digits_floor: config.floor,
        source,
        observation_count,
        groups,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// List every invariant a loaded report violates
///
/// An empty result means the report is consistent: groups strictly
/// ascending in `x`, sample counts adding up, finite moments and digits
/// inside the bounds of the recorded floor and ceiling.
pub fn check_report(report: &SummaryReport) -> Vec<String> {
    let mut problems = Vec::new();

    if report.version != SCHEMA_VERSION {
        problems.push(format!(
            "schema version {} does not match {}",
            report.version, SCHEMA_VERSION
        ));
    }

    if report.bit_width != report.precision.bit_width() {
        problems.push(format!(
            "bit width {} does not match {} precision",
            report.bit_width, report.precision
        ));
    }

    if (report.ceiling - report.precision.ceiling()).abs() > 1e-9 {
        problems.push(format!("ceiling {} does not match {} precision", report.ceiling, report.precision));
    }

    if report.groups.is_empty() {
        problems.push("report has no groups".to_string());
    }

    for pair in report.groups.windows(2) {
        if pair[0].x >= pair[1].x {
            problems.push(format!(
                "groups not strictly ascending: x = {} followed by x = {}",
                pair[0].x, pair[1].x
            ));
        }
    }

    let total: usize = report.groups.iter().map(|g| g.sample_count).sum();
    if total != report.observation_count {
        problems.push(format!(
            "group sample counts sum to {}, expected {}",
            total, report.observation_count
        ));
    }

    for group in &report.groups {
        if !group.mean.is_finite() || !group.stddev.is_finite() || group.stddev < 0.0 {
            problems.push(format!("group x = {} has invalid moments", group.x));
        }

        let digits = group.significant_digits;
        let above_ceiling = digits > report.ceiling;
        let below_floor = report.digits_floor == DigitsFloor::Zero && digits < 0.0;
        if digits.is_nan() || above_ceiling || below_floor {
            problems.push(format!(
                "group x = {} has significant digits {} outside bounds",
                group.x, digits
            ));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::parser::schema::{Observation, PrecisionClass};

    fn sample_report() -> SummaryReport {
        let observations = vec![
            Observation::new(0, 0.5, 1.0),
            Observation::new(1, 0.5, 1.1),
            Observation::new(0, 0.6, 2.0),
        ];
        let groups = aggregate(&observations, PrecisionClass::Single).unwrap();
        to_report(groups, &AggregationConfig::new(PrecisionClass::Single), None, 3)
    }

    #[test]
    fn test_to_report_fields() {
        let report = sample_report();

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.bit_width, 32);
        assert_eq!(report.groups.len(), 2);
        assert_eq!(report.observation_count, 3);
        assert!(!report.generated_at.is_empty());
    }

    #[test]
    fn test_consistent_report_has_no_problems() {
        assert!(check_report(&sample_report()).is_empty());
    }

    #[test]
    fn test_detects_unsorted_groups_and_counts() {
        let mut report = sample_report();
        report.groups.swap(0, 1);
        report.observation_count = 10;

        let problems = check_report(&report);
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_detects_digits_out_of_bounds() {
        let mut report = sample_report();
        report.groups[0].significant_digits = -1.0;
        report.groups[1].significant_digits = 100.0;

        assert_eq!(check_report(&report).len(), 2);
    }
}
