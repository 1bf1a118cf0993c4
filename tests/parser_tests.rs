use mca_digits::parser::{parse_observations, read_observations, read_sample_column, Observation, PrecisionClass};
use mca_digits::utils::ParseError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_read_tchebychev_style_table() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "0 0.5 1").unwrap();
    writeln!(file, "1 0.5 0.9999999999999996").unwrap();
    writeln!(file, "0 0.501 0.9599361599999871").unwrap();
    writeln!(file, "1 0.501 0.959936159999988").unwrap();

    let observations = read_observations(file.path(), 0).unwrap();

    assert_eq!(observations.len(), 4);
    assert_eq!(observations[0], Observation::new(0, 0.5, 1.0));
    assert_eq!(observations[3].index, 1);
    assert_eq!(observations[3].x, 0.501);
}

#[test]
fn test_read_sample_column_with_header() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "x").unwrap();
    writeln!(file, "1.89").unwrap();
    writeln!(file, "1.8900000000000001").unwrap();

    let samples = read_sample_column(file.path(), 1).unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0], 1.89);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = read_observations("/nonexistent/out_double.dat", 0);
    assert!(matches!(result, Err(ParseError::Io(_))));
}

#[test]
fn test_bad_number_names_line_and_column() {
    let content = "0 0.5 1.0\n1 0.5 abc\n";
    let err = parse_observations(content, 0).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("line 2"));
    assert!(message.contains("T 'abc'"));
}

#[test]
fn test_precision_parsing_aliases() {
    assert_eq!("f32".parse::<PrecisionClass>().unwrap(), PrecisionClass::Single);
    assert_eq!("f64".parse::<PrecisionClass>().unwrap(), PrecisionClass::Double);
    assert_eq!("extended".parse::<PrecisionClass>().unwrap(), PrecisionClass::Extended);
    assert_eq!(PrecisionClass::Extended.bit_width(), 80);
}
