//! End-to-end tests for the generation dispatcher.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use siggen::{GenerateRequest, SignalError, SignalKind};

#[test]
fn sinusoidal_request_produces_quarter_cycle_samples() {
    let column = GenerateRequest::new("carrier", SignalKind::Sinusoidal, 1.0, 4.0)
        .generate()
        .unwrap();
    assert_eq!(column.name, "carrier");
    let expected = [0.0, 1.0, 0.0, -1.0];
    assert_eq!(column.values.len(), expected.len());
    for (y, e) in column.values.iter().zip(expected) {
        assert!((y - e).abs() < 1e-9, "got {y}, expected {e}");
    }
}

#[test]
fn every_kind_produces_the_requested_length() {
    let mut rng = StdRng::seed_from_u64(0);
    for kind in [
        SignalKind::Sinusoidal,
        SignalKind::Cosinusoidal,
        SignalKind::Triangle,
        SignalKind::Square,
        SignalKind::Impulse,
        SignalKind::UniformNoise,
        SignalKind::GaussianNoise,
        SignalKind::BrownNoise,
    ] {
        let column = GenerateRequest::new("w", kind, 4.0, 100.0)
            .with_duration(2.5)
            .generate_with_rng(&mut rng)
            .unwrap();
        assert_eq!(column.values.len(), 250, "kind {kind}");
    }
}

#[test]
fn impulse_request_places_four_impulses() {
    let column = GenerateRequest::new("ticks", SignalKind::Impulse, 4.0, 100.0)
        .with_amplitude(2.0)
        .generate()
        .unwrap();
    let nonzero: Vec<f64> = column.values.iter().copied().filter(|y| *y != 0.0).collect();
    assert_eq!(nonzero, vec![2.0, 2.0, 2.0, 2.0]);
}

#[test]
fn unknown_kind_name_fails_with_invalid_signal_kind() {
    let err = "hexagonal".parse::<SignalKind>().unwrap_err();
    assert_eq!(err, SignalError::InvalidSignalKind("hexagonal".to_owned()));
}

#[test]
fn parsed_kind_name_drives_generation() {
    let kind: SignalKind = "triangle".parse().unwrap();
    let column = GenerateRequest::new("tri", kind, 2.0, 64.0)
        .with_amplitude(1.0)
        .generate()
        .unwrap();
    let peak = column.values.iter().fold(0.0_f64, |acc, y| acc.max(y.abs()));
    assert!((peak - 1.0).abs() < 1e-12);
}

#[test]
fn noise_requests_are_reproducible_with_a_seeded_rng() {
    let request = GenerateRequest::new("n", SignalKind::BrownNoise, 0.0, 100.0).with_amplitude(2.0);
    let a = request
        .generate_with_rng(&mut StdRng::seed_from_u64(42))
        .unwrap();
    let b = request
        .generate_with_rng(&mut StdRng::seed_from_u64(42))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn generated_column_merges_into_a_frame() {
    let mut frame: HashMap<String, Vec<f64>> = HashMap::new();
    frame.insert("existing".to_owned(), vec![1.0, 2.0]);

    GenerateRequest::new("wave", SignalKind::Square, 2.0, 8.0)
        .apply_to(&mut frame)
        .unwrap();

    assert_eq!(frame.len(), 2);
    assert_eq!(frame["wave"].len(), 8);
    assert_eq!(frame["existing"], vec![1.0, 2.0]);
}

#[test]
fn regenerating_a_column_overwrites_it() {
    let mut frame: HashMap<String, Vec<f64>> = HashMap::new();
    let request = GenerateRequest::new("wave", SignalKind::Sinusoidal, 1.0, 4.0);
    request.apply_to(&mut frame).unwrap();
    request.clone().with_duration(2.0).apply_to(&mut frame).unwrap();
    assert_eq!(frame["wave"].len(), 8);
}

#[test]
fn noise_kinds_ignore_offset_and_start() {
    let base = GenerateRequest::new("n", SignalKind::UniformNoise, 0.0, 100.0);
    let shifted = base.clone().with_offset(1.0).with_start(5.0);
    let a = base.generate_with_rng(&mut StdRng::seed_from_u64(1)).unwrap();
    let b = shifted
        .generate_with_rng(&mut StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(a.values, b.values);
}
