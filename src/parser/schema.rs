//! Data model for MCA samples and the JSON summary schema.
//!
//! Observations come in from sample tables; summaries and reports are what
//! we write to disk. The report schema is versioned to allow future evolution.

use crate::utils::config::{DOUBLE_BIT_WIDTH, EXTENDED_BIT_WIDTH, SINGLE_BIT_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One Monte-Carlo Arithmetic trial: `T` evaluated at `x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Trial index as written by the sampler (not used for grouping)
    pub index: i64,

    /// Input value
    pub x: f64,

    /// Function evaluation under randomized rounding
    pub t: f64,
}

impl Observation {
    pub fn new(index: i64, x: f64, t: f64) -> Self {
        Self { index, x, t }
    }
}

/// Floating-point format the samples were computed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecisionClass {
    Single,
    Double,
    Extended,
}

impl PrecisionClass {
    /// Bit width of the format
    pub const fn bit_width(self) -> u32 {
        match self {
            PrecisionClass::Single => SINGLE_BIT_WIDTH,
            PrecisionClass::Double => DOUBLE_BIT_WIDTH,
            PrecisionClass::Extended => EXTENDED_BIT_WIDTH,
        }
    }

    /// Maximum number of significant decimal digits the format can carry
    ///
    /// `bit_width * log10(2)`, e.g. ≈ 19.266 for double.
    pub fn ceiling(self) -> f64 {
        f64::from(self.bit_width()) * std::f64::consts::LOG10_2
    }

    pub fn name(self) -> &'static str {
        match self {
            PrecisionClass::Single => "single",
            PrecisionClass::Double => "double",
            PrecisionClass::Extended => "extended",
        }
    }

    /// Guess the precision from a sample file stem such as `out_float`
    ///
    /// `longdouble` is checked before `double` since it contains it.
    pub fn infer_from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.contains("longdouble") || lower.contains("long_double") || lower.contains("extended") {
            Some(PrecisionClass::Extended)
        } else if lower.contains("double") {
            Some(PrecisionClass::Double)
        } else if lower.contains("float") || lower.contains("single") {
            Some(PrecisionClass::Single)
        } else {
            None
        }
    }
}

impl fmt::Display for PrecisionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrecisionClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "float" | "f32" => Ok(PrecisionClass::Single),
            "double" | "f64" => Ok(PrecisionClass::Double),
            "extended" | "longdouble" | "long-double" | "f80" => Ok(PrecisionClass::Extended),
            other => Err(format!(
                "unknown precision '{}' (expected single, double or extended)",
                other
            )),
        }
    }
}

/// Lower bound applied to the significant-digits value
///
/// Stott Parker's formula goes negative once `stddev > |mean|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitsFloor {
    /// Clamp to `[0, ceiling]`
    #[default]
    Zero,
    /// Keep negative values (only the ceiling applies)
    Unbounded,
}

/// Statistics for all observations sharing one `x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub x: f64,

    /// Arithmetic mean of `T`
    pub mean: f64,

    /// Population standard deviation of `T`
    pub stddev: f64,

    /// Stott Parker significant digits, bounded by the precision ceiling
    pub significant_digits: f64,

    /// Number of observations in the group
    pub sample_count: usize,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Schema version for compatibility checking
    pub version: String,

    pub precision: PrecisionClass,

    pub bit_width: u32,

    /// Significant-digits ceiling for `precision`
    pub ceiling: f64,

    /// Lower-bound policy the digits were computed with
    pub digits_floor: DigitsFloor,

    /// Sample table the report was built from
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<String>,

    /// Total observations aggregated
    pub observation_count: usize,

    /// One entry per distinct `x`, ascending
    pub groups: Vec<GroupSummary>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// One equal-width histogram bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Distribution of a single column of stochastic samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleHistogram {
    pub min: f64,
    pub max: f64,
    pub sample_count: usize,
    pub bins: Vec<HistogramBin>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceilings() {
        assert!((PrecisionClass::Single.ceiling() - 9.633).abs() < 1e-3);
        assert!((PrecisionClass::Double.ceiling() - 19.266).abs() < 1e-3);
        assert!((PrecisionClass::Extended.ceiling() - 24.082).abs() < 1e-3);
    }

    #[test]
    fn test_precision_from_str() {
        assert_eq!("float".parse::<PrecisionClass>(), Ok(PrecisionClass::Single));
        assert_eq!("Double".parse::<PrecisionClass>(), Ok(PrecisionClass::Double));
        assert_eq!("longdouble".parse::<PrecisionClass>(), Ok(PrecisionClass::Extended));
        assert!("half".parse::<PrecisionClass>().is_err());
    }

    #[test]
    fn test_infer_from_name() {
        assert_eq!(PrecisionClass::infer_from_name("out_float"), Some(PrecisionClass::Single));
        assert_eq!(PrecisionClass::infer_from_name("out_double"), Some(PrecisionClass::Double));
        assert_eq!(
            PrecisionClass::infer_from_name("out_longdouble"),
            Some(PrecisionClass::Extended)
        );
        assert_eq!(PrecisionClass::infer_from_name("out"), None);
    }

    #[test]
    fn test_precision_serializes_lowercase() {
        let json = serde_json::to_string(&PrecisionClass::Extended).unwrap();
        assert_eq!(json, "\"extended\"");
    }
}
