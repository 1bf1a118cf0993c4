//! Per-input statistics and Stott Parker significant digits.
//!
//! Observations are grouped by their `x` value. For every group we compute
//! the mean and population standard deviation of `T` and estimate how many
//! decimal digits of `T` survive randomized rounding:
//!
//! ```text
//! s = -log10(sigma / |mu|)
//! ```
//!
//! bounded above by what the floating-point format can represent.

use crate::parser::schema::{DigitsFloor, GroupSummary, Observation, PrecisionClass};
use crate::utils::error::AggregateError;
use log::debug;

/// Aggregation parameters
///
/// Passed by value into every call; nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationConfig {
    pub precision: PrecisionClass,
    pub floor: DigitsFloor,
}

impl AggregationConfig {
    pub fn new(precision: PrecisionClass) -> Self {
        Self {
            precision,
            floor: DigitsFloor::default(),
        }
    }

    pub fn with_floor(mut self, floor: DigitsFloor) -> Self {
        self.floor = floor;
        self
    }

    pub fn ceiling(&self) -> f64 {
        self.precision.ceiling()
    }
}

/// Aggregate observations with the default lower bound (zero)
///
/// **Public** - main entry point for analysis
///
/// # Arguments
/// * `observations` - MCA trials; several may share an `x`
/// * `precision` - Format the trials were computed in
///
/// # Returns
/// One summary per distinct `x`, ordered by ascending `x`
///
/// # Errors
/// * `AggregateError::InvalidInput` - empty input or a non-finite `x`/`T`
pub fn aggregate(
    observations: &[Observation],
    precision: PrecisionClass,
) -> Result<Vec<GroupSummary>, AggregateError> {
    aggregate_with(observations, &AggregationConfig::new(precision))
}

/// Aggregate observations with an explicit configuration
///
/// Groups are formed by exact `==` on `x`. Values that should land in the
/// same group must be bit-for-bit reproduced by the sampler; recomputed
/// inputs that differ in the last ulp end up in separate groups.
/// `-0.0` and `+0.0` compare equal and share a group.
pub fn aggregate_with(
    observations: &[Observation],
    config: &AggregationConfig,
) -> Result<Vec<GroupSummary>, AggregateError> {
    validate_observations(observations)?;

    debug!(
        "Aggregating {} observations at {} precision (ceiling {:.3})",
        observations.len(),
        config.precision,
        config.ceiling()
    );

    // Canonical order: ascending x, then T within a group. Summation order
    // is then independent of input order.
    let mut sorted: Vec<&Observation> = observations.iter().collect();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then_with(|| a.t.total_cmp(&b.t)));

    let mut summaries = Vec::new();
    let mut start = 0;
    for end in 1..=sorted.len() {
        if end == sorted.len() || sorted[end].x != sorted[start].x {
            summaries.push(summarize_group(&sorted[start..end], config)?);
            start = end;
        }
    }

    debug!("Built {} groups", summaries.len());
    Ok(summaries)
}

/// Stott Parker significant digits for one group's moments
///
/// * `stddev == 0` gives the ceiling
/// * `mean == 0` (with spread) gives zero
/// * otherwise `-log10(stddev / |mean|)` capped at the ceiling, then floored
///   according to `floor`
pub fn significant_digits(mean: f64, stddev: f64, precision: PrecisionClass, floor: DigitsFloor) -> f64 {
    let ceiling = precision.ceiling();

    if stddev == 0.0 {
        return ceiling;
    }
    if mean == 0.0 {
        return 0.0;
    }

    // log10(|mu|) - log10(sigma) stays finite where the ratio could overflow
    let raw = mean.abs().log10() - stddev.log10();
    let capped = raw.min(ceiling);

    match floor {
        DigitsFloor::Zero => capped.max(0.0),
        DigitsFloor::Unbounded => capped,
    }
}

/// Mean and population standard deviation
///
/// Identical values yield exactly `(value, 0.0)`. Large magnitudes are
/// scaled by a power of two before summing, so intermediate sums and squares
/// cannot overflow while the true moments are representable. Returns `None`
/// for empty input or when a rescaled moment still overflows.
pub fn mean_and_stddev(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;

    if values.iter().all(|&v| v == first) {
        return Some((first, 0.0));
    }

    let max_abs = values.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    // Power of two (the exponent bits of max_abs), so dividing by it is exact
    let scale = if max_abs > 1.0 {
        f64::from_bits(max_abs.to_bits() & 0x7FF0_0000_0000_0000)
    } else {
        1.0
    };

    let n = values.len() as f64;
    let scaled_mean = values.iter().map(|v| v / scale).sum::<f64>() / n;
    let scaled_variance = values
        .iter()
        .map(|v| (v / scale - scaled_mean).powi(2))
        .sum::<f64>()
        / n;

    let mean = scaled_mean * scale;
    let stddev = scaled_variance.sqrt() * scale;

    if mean.is_finite() && stddev.is_finite() {
        Some((mean, stddev))
    } else {
        None
    }
}

/// Reject inputs that would poison the moments
///
/// **Private** - internal validation
fn validate_observations(observations: &[Observation]) -> Result<(), AggregateError> {
    if observations.is_empty() {
        return Err(AggregateError::InvalidInput(
            "no observations to aggregate".to_string(),
        ));
    }

    for (position, obs) in observations.iter().enumerate() {
        for (field, value) in [("x", obs.x), ("T", obs.t)] {
            if !value.is_finite() {
                return Err(AggregateError::InvalidInput(format!(
                    "observation #{} (index {}) has non-finite {} = {}",
                    position, obs.index, field, value
                )));
            }
        }
    }

    Ok(())
}

fn summarize_group(
    members: &[&Observation],
    config: &AggregationConfig,
) -> Result<GroupSummary, AggregateError> {
    let x = members[0].x;
    let values: Vec<f64> = members.iter().map(|obs| obs.t).collect();

    let (mean, stddev) = mean_and_stddev(&values).ok_or_else(|| {
        AggregateError::InvalidInput(format!(
            "moments of group x = {} are not representable as f64",
            x
        ))
    })?;

    Ok(GroupSummary {
        x,
        mean,
        stddev,
        significant_digits: significant_digits(mean, stddev, config.precision, config.floor),
        sample_count: members.len(),
    })
}
