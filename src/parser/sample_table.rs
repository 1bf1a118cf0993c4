//! Loader for whitespace-delimited MCA sample tables.
//!
//! Two layouts are produced by the samplers:
//! - `index x T` rows (one trial per line)
//! - a single column of values, usually under a one-line header
//!
//! Blank lines and anything after `#` are ignored. Non-finite tokens
//! (`nan`, `inf`) are accepted here and rejected by the aggregator.

use super::schema::Observation;
use crate::utils::config::COMMENT_MARKER;
use crate::utils::error::ParseError;
use log::debug;
use std::path::Path;

/// Parse an `index x T` table into observations
///
/// **Public** - main entry point for three-column tables
///
/// # Arguments
/// * `content` - Raw table text
/// * `skip_rows` - Number of leading lines to skip (headers)
///
/// # Errors
/// * `ParseError::InvalidFormat` - wrong column count or unparsable number,
///   with the 1-based line number
pub fn parse_observations(content: &str, skip_rows: usize) -> Result<Vec<Observation>, ParseError> {
    let mut observations = Vec::new();

    for (line_no, fields) in data_rows(content, skip_rows) {
        if fields.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "line {}: expected 3 columns (index x T), found {}",
                line_no,
                fields.len()
            )));
        }

        let index = parse_index(fields[0], line_no)?;
        let x = parse_real(fields[1], "x", line_no)?;
        let t = parse_real(fields[2], "T", line_no)?;

        observations.push(Observation::new(index, x, t));
    }

    debug!("Parsed {} observations", observations.len());
    Ok(observations)
}

/// Parse a single-column table of sample values
pub fn parse_sample_column(content: &str, skip_rows: usize) -> Result<Vec<f64>, ParseError> {
    let mut samples = Vec::new();

    for (line_no, fields) in data_rows(content, skip_rows) {
        if fields.len() != 1 {
            return Err(ParseError::InvalidFormat(format!(
                "line {}: expected 1 column, found {}",
                line_no,
                fields.len()
            )));
        }
        samples.push(parse_real(fields[0], "value", line_no)?);
    }

    debug!("Parsed {} samples", samples.len());
    Ok(samples)
}

/// Read and parse an `index x T` table from disk
pub fn read_observations(path: impl AsRef<Path>, skip_rows: usize) -> Result<Vec<Observation>, ParseError> {
    let path = path.as_ref();
    debug!("Reading observations from: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    parse_observations(&content, skip_rows)
}

/// Read and parse a single-column sample table from disk
pub fn read_sample_column(path: impl AsRef<Path>, skip_rows: usize) -> Result<Vec<f64>, ParseError> {
    let path = path.as_ref();
    debug!("Reading samples from: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    parse_sample_column(&content, skip_rows)
}

/// Yield (line number, fields) for every non-empty data row
///
/// **Private** - shared tokenizer
fn data_rows(content: &str, skip_rows: usize) -> impl Iterator<Item = (usize, Vec<&str>)> {
    content
        .lines()
        .enumerate()
        .skip(skip_rows)
        .filter_map(|(i, line)| {
            let data = match line.find(COMMENT_MARKER) {
                Some(pos) => &line[..pos],
                None => line,
            };
            let fields: Vec<&str> = data.split_whitespace().collect();
            if fields.is_empty() {
                None
            } else {
                Some((i + 1, fields))
            }
        })
}

fn parse_index(token: &str, line_no: usize) -> Result<i64, ParseError> {
    token.parse::<i64>().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "line {}: index '{}' is not an integer",
            line_no, token
        ))
    })
}

fn parse_real(token: &str, column: &str, line_no: usize) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "line {}: {} '{}' is not a number",
            line_no, column, token
        ))
    })
}
