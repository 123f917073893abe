mod common;

#[cfg(test)]
mod test_classification {
    use super::common::{assert_close, diagnosis_classifier, observe, TOLERANCE};
    use naivebayes::{EntityKind, NaiveBayesClassifier, NaiveBayesError, Observations};

    fn with_flu_detector() -> NaiveBayesClassifier {
        let mut c = diagnosis_classifier();
        c.add_feature("Flu detector").unwrap();
        c.add_state("Flu detector", "on").unwrap();
        c.add_state("Flu detector", "off").unwrap();

        c.set_conditional("Flu detector", "on", "Flu", 0.99).unwrap();
        // The detector cannot trigger without flu
        c.set_conditional("Flu detector", "on", "Measles", 0.0).unwrap();
        c.set_conditional("Flu detector", "on", "No disease", 0.0).unwrap();

        c.set_conditional("Flu detector", "off", "Flu", 0.01).unwrap();
        c.set_conditional("Flu detector", "off", "Measles", 1.0).unwrap();
        c.set_conditional("Flu detector", "off", "No disease", 1.0).unwrap();
        c
    }

    #[test]
    fn test_no_observations_returns_priors() {
        let c = diagnosis_classifier();
        let result = c.classify(&Observations::new()).unwrap();
        assert_eq!(result, vec![0.06, 0.04, 0.90]);
        assert_eq!(result, c.get_priors());
    }

    #[test]
    fn test_fever_without_red_spots() {
        let c = diagnosis_classifier();
        let result = c
            .classify(&observe(&[("Fever", "yes"), ("Red spots", "no")]))
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_close(result[0], 0.8039492242595203, 1e-12);
        assert_close(result[1], 0.05641748942172074, 1e-12);
        assert_close(result[2], 0.13963328631875882, 1e-12);
        assert_close(result.iter().sum(), 1.0, TOLERANCE);
    }

    #[test]
    fn test_red_spots_sum_to_one() {
        let c = diagnosis_classifier();
        let result = c.classify(&observe(&[("Red spots", "yes")])).unwrap();
        assert_close(result.iter().sum(), 1.0, TOLERANCE);
        // Red spots point to measles
        assert!(result[1] > result[0]);
    }

    #[test]
    fn test_extreme_conditionals() {
        let c = with_flu_detector();
        let result = c.classify(&observe(&[("Flu detector", "on")])).unwrap();

        assert_close(result[0], 1.0, TOLERANCE);
        assert_close(result[1], 0.0, TOLERANCE);
        assert_close(result[2], 0.0, TOLERANCE);
        assert_close(result.iter().sum(), 1.0, 1e-6);
    }

    #[test]
    fn test_zero_evidence_is_degenerate() {
        let mut c = with_flu_detector();
        c.set_conditional("Flu detector", "on", "Flu", 0.0).unwrap();
        c.set_conditional("Flu detector", "off", "Flu", 1.0).unwrap();
        c.validate().unwrap();

        let err = c.classify(&observe(&[("Flu detector", "on")])).unwrap_err();
        assert!(matches!(err, NaiveBayesError::DegenerateEvidence));
    }

    #[test]
    fn test_overflowing_evidence_is_degenerate() {
        let mut c = NaiveBayesClassifier::new();
        c.add_label("only").unwrap();
        c.set_prior("only", 1.0).unwrap();
        for feature in ["A", "B"] {
            c.add_feature(feature).unwrap();
            for (state, p) in [("a", 1e300), ("b", -1e300), ("c", 1.0)] {
                c.add_state(feature, state).unwrap();
                c.set_conditional(feature, state, "only", p).unwrap();
            }
        }
        // Each column sums to exactly 1.0, yet 1e300 * 1e300 overflows
        c.validate().unwrap();

        let err = c.classify(&observe(&[("A", "a"), ("B", "a")])).unwrap_err();
        assert!(matches!(err, NaiveBayesError::DegenerateEvidence));

        let result = c.classify(&observe(&[("A", "a"), ("B", "c")])).unwrap();
        assert_eq!(result, vec![1.0]);
    }

    #[test]
    fn test_underflowing_evidence_is_degenerate() {
        let mut c = NaiveBayesClassifier::new();
        c.add_label("rare").unwrap();
        c.add_label("common").unwrap();
        c.set_prior("rare", 0.5).unwrap();
        c.set_prior("common", 0.5).unwrap();

        let mut observations = Observations::new();
        for i in 0..200 {
            let feature = format!("sensor{}", i);
            c.add_feature(&feature).unwrap();
            c.add_state(&feature, "low").unwrap();
            c.add_state(&feature, "high").unwrap();
            c.set_conditional(&feature, "low", "rare", 0.01).unwrap();
            c.set_conditional(&feature, "high", "rare", 0.99).unwrap();
            c.set_conditional(&feature, "low", "common", 0.02).unwrap();
            c.set_conditional(&feature, "high", "common", 0.98).unwrap();
            observations.insert(feature, "low".to_string());
        }
        c.validate().unwrap();

        // 0.01^200 and 0.02^200 both underflow to zero
        let err = c.classify(&observations).unwrap_err();
        assert!(matches!(err, NaiveBayesError::DegenerateEvidence));
    }

    #[test]
    fn test_unknown_observations_fail() {
        let c = diagnosis_classifier();

        match c.classify(&observe(&[("Cough", "yes")])) {
            Err(NaiveBayesError::NotFound { kind, name, .. }) => {
                assert_eq!(kind, EntityKind::Feature);
                assert_eq!(name, "Cough");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }

        match c.classify(&observe(&[("Fever", "yes"), ("Red spots", "maybe")])) {
            Err(NaiveBayesError::NotFound { kind, scope, .. }) => {
                assert_eq!(kind, EntityKind::State);
                assert_eq!(scope.as_deref(), Some("Red spots"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_failure_comes_first() {
        let mut c = diagnosis_classifier();
        c.set_prior("Flu", 0.5).unwrap();
        let err = c.classify(&observe(&[("Cough", "yes")])).unwrap_err();
        assert!(err.is_inconsistent_model());
    }

    #[test]
    fn test_classify_does_not_mutate() {
        let c = diagnosis_classifier();
        let before = c.snapshot();
        c.classify(&observe(&[("Fever", "no")])).unwrap();
        let _ = c.classify(&observe(&[("Cough", "yes")]));
        let after = c.snapshot();
        assert_eq!(before.labels, after.labels);
        assert_eq!(before.features, after.features);
    }

    #[test]
    fn test_result_follows_label_order_after_removal() {
        let mut c = diagnosis_classifier();
        c.remove_label("Measles").unwrap();
        c.set_prior("Flu", 0.10).unwrap();
        c.remove_feature("Red spots").unwrap();

        let result = c.classify(&observe(&[("Fever", "yes")])).unwrap();
        let z = 0.10 * 0.90 + 0.90 * 0.01;
        assert_close(result[0], 0.10 * 0.90 / z, 1e-12);
        assert_close(result[1], 0.90 * 0.01 / z, 1e-12);
    }

    #[test]
    fn test_posterior_pairs_labels() {
        let c = diagnosis_classifier();
        let posterior = c
            .posterior(&observe(&[("Fever", "yes"), ("Red spots", "no")]))
            .unwrap();

        assert_eq!(posterior.len(), 3);
        assert_eq!(posterior.labels(), c.get_labels().as_slice());
        assert_close(posterior.get("Flu").unwrap(), 0.8039492242595203, 1e-12);
        assert_eq!(posterior.get("Cold"), None);

        let (label, p) = posterior.most_probable().unwrap();
        assert_eq!(label, "Flu");
        assert_close(p, 0.8039492242595203, 1e-12);

        let names: Vec<&str> = posterior.iter().map(|(label, _)| label).collect();
        assert_eq!(names, vec!["Flu", "Measles", "No disease"]);
        assert_eq!(posterior.into_vec().len(), 3);
    }

    #[test]
    fn test_most_probable_prefers_first_on_tie() {
        let mut c = NaiveBayesClassifier::new();
        c.add_label("heads").unwrap();
        c.add_label("tails").unwrap();
        c.set_prior("heads", 0.5).unwrap();
        c.set_prior("tails", 0.5).unwrap();

        let posterior = c.posterior(&Observations::new()).unwrap();
        assert_eq!(posterior.most_probable(), Some(("heads", 0.5)));
    }
}
