//! Equal-width histograms of stochastic rounding samples.
//!
//! Used to check that a value rounded many times under MCA lands on both
//! neighbouring representable values (two bins for a single rounding).

use crate::parser::schema::{HistogramBin, SampleHistogram};
use crate::utils::config::MAX_HISTOGRAM_BINS;
use crate::utils::error::AggregateError;
use log::debug;

/// Bin samples into `bins` equal-width intervals over `[min, max]`
///
/// **Public** - main entry point for histogram analysis
///
/// Every bin is half-open `[lower, upper)` except the last, which also
/// holds `max`. When all samples are equal the range is widened to
/// `[value - pad, value + pad]` with `pad = max(0.5, |value| * EPSILON)`,
/// so the padding survives rounding at large magnitudes.
///
/// # Errors
/// * `AggregateError::InvalidInput` - no samples, zero bins, a non-finite
///   sample, or a range too wide to represent
pub fn histogram(samples: &[f64], bins: usize) -> Result<SampleHistogram, AggregateError> {
    if samples.is_empty() {
        return Err(AggregateError::InvalidInput("no samples to bin".to_string()));
    }
    if bins == 0 || bins > MAX_HISTOGRAM_BINS {
        return Err(AggregateError::InvalidInput(format!(
            "bin count must be between 1 and {}, got {}",
            MAX_HISTOGRAM_BINS, bins
        )));
    }
    if let Some((position, value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(AggregateError::InvalidInput(format!(
            "sample #{} is non-finite ({})",
            position, value
        )));
    }

    let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let (lower, upper) = if min == max {
        let pad = 0.5f64.max(min.abs() * f64::EPSILON);
        (min - pad, max + pad)
    } else {
        (min, max)
    };

    let width = (upper - lower) / bins as f64;
    if !width.is_finite() || width <= 0.0 {
        return Err(AggregateError::InvalidInput(format!(
            "sample range [{}, {}] cannot be split into {} bins",
            min, max, bins
        )));
    }

    let mut counts = vec![0usize; bins];
    for &value in samples {
        let slot = ((value - lower) / width) as usize;
        counts[slot.min(bins - 1)] += 1;
    }

    let binned: Vec<HistogramBin> = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lower + i as f64 * width,
            upper: if i + 1 == bins { upper } else { lower + (i + 1) as f64 * width },
            count,
        })
        .collect();

    debug!("Binned {} samples into {} bins over [{}, {}]", samples.len(), binned.len(), lower, upper);

    Ok(SampleHistogram {
        min,
        max,
        sample_count: samples.len(),
        bins: binned,
    })
}
