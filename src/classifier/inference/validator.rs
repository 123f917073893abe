use crate::classifier::common::config::ValidationConfig;
use crate::classifier::common::error::{Distribution, NaiveBayesError, Result};
use crate::classifier::model::ProbabilityTable;
use log::{trace, warn};

/// Checks that the priors and every per-label conditional distribution
/// sum to 1.0, stopping at the first one that does not.
///
/// The priors are checked first, then each feature in insertion order and,
/// within a feature, each label in label order. Sums are accumulated left to
/// right starting from zero so the result does not depend on how the
/// storage happens to reduce.
pub fn validate(table: &ProbabilityTable, config: &ValidationConfig) -> Result<()> {
    trace!("validate - Start");
    let prior_sum = table.priors().iter().fold(0.0, |acc, &p| acc + p);
    if !config.accepts(prior_sum) {
        return Err(inconsistent(Distribution::Priors, prior_sum));
    }

    for feature in table.features() {
        for (position, label) in table.label_index().iter().enumerate() {
            let sum = feature.column_sum(position);
            if !config.accepts(sum) {
                return Err(inconsistent(
                    Distribution::Conditional {
                        feature: feature.name().to_string(),
                        label: label.name.clone(),
                    },
                    sum,
                ));
            }
        }
    }
    trace!("validate - End");
    Ok(())
}

fn inconsistent(distribution: Distribution, sum: f64) -> NaiveBayesError {
    let error = NaiveBayesError::InconsistentModel { distribution, sum };
    warn!("Validation failed: {}", error);
    error
}
