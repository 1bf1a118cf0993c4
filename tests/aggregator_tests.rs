use mca_digits::aggregator::{aggregate, aggregate_with, histogram, AggregationConfig};
use mca_digits::parser::{DigitsFloor, Observation, PrecisionClass};
use mca_digits::utils::AggregateError;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

/// Deterministic noisy samples: 20 trials for each of 50 inputs
fn noisy_observations() -> Vec<Observation> {
    let mut observations = Vec::new();
    for i in 0..50 {
        let x = 0.5 + i as f64 * 0.01;
        for j in 0..20 {
            let noise = ((i * 31 + j * 17) % 11) as f64 - 5.0;
            observations.push(Observation::new(j, x, x * x + noise * 1e-9));
        }
    }
    observations
}

#[test]
fn test_grouping_completeness() {
    let observations = noisy_observations();
    let groups = aggregate(&observations, PrecisionClass::Double).unwrap();

    let input_xs: BTreeSet<u64> = observations.iter().map(|o| o.x.to_bits()).collect();
    let output_xs: BTreeSet<u64> = groups.iter().map(|g| g.x.to_bits()).collect();

    assert_eq!(groups.len(), input_xs.len());
    assert_eq!(output_xs, input_xs);
    assert!(groups.windows(2).all(|w| w[0].x < w[1].x));
    assert_eq!(groups.iter().map(|g| g.sample_count).sum::<usize>(), observations.len());
}

#[test]
fn test_digits_within_bounds() {
    for precision in [PrecisionClass::Single, PrecisionClass::Double, PrecisionClass::Extended] {
        let groups = aggregate(&noisy_observations(), precision).unwrap();
        for group in groups {
            assert!(group.significant_digits.is_finite());
            assert!(group.significant_digits >= 0.0);
            assert!(group.significant_digits <= precision.ceiling());
        }
    }
}

#[test]
fn test_permutation_gives_identical_results() {
    let observations = noisy_observations();
    let baseline = aggregate(&observations, PrecisionClass::Double).unwrap();

    let mut reversed = observations.clone();
    reversed.reverse();
    assert_eq!(aggregate(&reversed, PrecisionClass::Double).unwrap(), baseline);

    let mut rotated = observations.clone();
    rotated.rotate_left(333);
    assert_eq!(aggregate(&rotated, PrecisionClass::Double).unwrap(), baseline);
}

#[test]
fn test_repeatable_samples_reach_double_ceiling() {
    let observations = vec![
        Observation::new(0, 1.0, 2.0),
        Observation::new(1, 1.0, 2.0),
        Observation::new(2, 1.0, 2.0),
    ];

    let groups = aggregate(&observations, PrecisionClass::Double).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].mean, 2.0);
    assert_eq!(groups[0].stddev, 0.0);
    assert!((groups[0].significant_digits - 64.0 * 2f64.log10()).abs() < 1e-12);
}

#[test]
fn test_spread_larger_than_mean() {
    let observations = vec![
        Observation::new(0, 5.0, 0.0),
        Observation::new(1, 5.0, 0.0),
        Observation::new(2, 5.0, 1.0),
    ];

    let clamped = aggregate(&observations, PrecisionClass::Double).unwrap();
    assert_eq!(clamped[0].significant_digits, 0.0);

    let config = AggregationConfig::new(PrecisionClass::Double).with_floor(DigitsFloor::Unbounded);
    let raw = aggregate_with(&observations, &config).unwrap();
    assert!(raw[0].significant_digits < 0.0);
    assert!((raw[0].significant_digits + 2f64.sqrt().log10()).abs() < 1e-9);
    assert_eq!(raw[0].mean, clamped[0].mean);
    assert_eq!(raw[0].stddev, clamped[0].stddev);
}

#[test]
fn test_zero_mean_with_spread() {
    let observations = vec![
        Observation::new(0, 2.0, 0.25),
        Observation::new(1, 2.0, -0.25),
    ];
    let groups = aggregate(&observations, PrecisionClass::Extended).unwrap();
    assert_eq!(groups[0].significant_digits, 0.0);
}

#[test]
fn test_invalid_input_rejected() {
    assert!(matches!(
        aggregate(&[], PrecisionClass::Double),
        Err(AggregateError::InvalidInput(_))
    ));

    let with_nan = vec![Observation::new(0, 1.0, 2.0), Observation::new(1, 1.0, f64::NAN)];
    assert!(matches!(
        aggregate(&with_nan, PrecisionClass::Double),
        Err(AggregateError::InvalidInput(_))
    ));
}

#[test]
fn test_histogram_of_single_rounding() {
    let mut samples = vec![1.89; 600];
    samples.extend(vec![1.8900000000000001; 400]);
    samples.push(1.8899999999999997);

    let hist = histogram(&samples, 2).unwrap();

    assert_eq!(hist.sample_count, 1001);
    assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), 1001);
}
