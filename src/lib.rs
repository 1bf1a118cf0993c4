//! MCA Digits
//!
//! Significant-digits analysis for Monte-Carlo Arithmetic (MCA) samples.
//!
//! A function evaluated many times under randomized rounding yields a table
//! of `(index, x, T)` observations. This crate groups them by `x`, computes
//! the mean and population standard deviation of `T`, and estimates the
//! number of trustworthy decimal digits with Stott Parker's formula.
//!
//! ```ignore
//! use mca_digits::aggregator::aggregate;
//! use mca_digits::parser::{Observation, PrecisionClass};
//!
//! let observations = vec![Observation::new(0, 1.0, 2.0), Observation::new(1, 1.0, 2.0)];
//! let groups = aggregate(&observations, PrecisionClass::Double)?;
//! ```
//!
//! The `mca-digits` binary wraps the library:
//!
//! ```bash
//! mca-digits analyze -i out_double.dat -o summary.json --summary
//! mca-digits histogram -i out_one.dat --bins 2
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
