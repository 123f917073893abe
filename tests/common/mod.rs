#![allow(dead_code)]

use naivebayes::{NaiveBayesClassifier, Observations};

pub const TOLERANCE: f64 = 1e-7;

/// Route `log` output through env_logger so RUST_LOG works under `cargo test`
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {} but got {}",
        expected,
        tolerance,
        actual
    );
}

pub fn observe(pairs: &[(&str, &str)]) -> Observations {
    pairs
        .iter()
        .map(|(feature, state)| (feature.to_string(), state.to_string()))
        .collect()
}

/// Diagnosing flu or measles from fever and red spots.
pub fn diagnosis_classifier() -> NaiveBayesClassifier {
    init_logging();
    let mut c = NaiveBayesClassifier::new();
    c.add_label("Flu").unwrap();
    c.add_label("Measles").unwrap();
    c.add_label("No disease").unwrap();

    c.add_feature("Fever").unwrap();
    c.add_state("Fever", "yes").unwrap();
    c.add_state("Fever", "no").unwrap();

    c.add_feature("Red spots").unwrap();
    c.add_state("Red spots", "yes").unwrap();
    c.add_state("Red spots", "no").unwrap();

    c.set_prior("Flu", 0.06).unwrap();
    c.set_prior("Measles", 0.04).unwrap();
    c.set_prior("No disease", 0.90).unwrap();

    c.set_conditional("Fever", "yes", "Flu", 0.90).unwrap();
    c.set_conditional("Fever", "yes", "Measles", 0.90).unwrap();
    c.set_conditional("Fever", "yes", "No disease", 0.01).unwrap();

    c.set_conditional("Fever", "no", "Flu", 0.10).unwrap();
    c.set_conditional("Fever", "no", "Measles", 0.10).unwrap();
    c.set_conditional("Fever", "no", "No disease", 0.99).unwrap();

    c.set_conditional("Red spots", "yes", "Flu", 0.05).unwrap();
    c.set_conditional("Red spots", "yes", "Measles", 0.90).unwrap();
    c.set_conditional("Red spots", "yes", "No disease", 0.01).unwrap();

    c.set_conditional("Red spots", "no", "Flu", 0.95).unwrap();
    c.set_conditional("Red spots", "no", "Measles", 0.10).unwrap();
    c.set_conditional("Red spots", "no", "No disease", 0.99).unwrap();

    c.validate().expect("diagnosis model should be consistent");
    c
}
