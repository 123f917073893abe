use super::validator::validate;
use crate::classifier::common::config::ValidationConfig;
use crate::classifier::common::error::{NaiveBayesError, Result};
use crate::classifier::model::ProbabilityTable;
use log::{debug, trace, warn};
use ndarray::{Array1, ArrayView1};
use std::collections::HashMap;

/// Observed features: feature name to observed state label.
/// Features that are absent are unobserved.
pub type Observations = HashMap<String, String>;

/// Computes P(label | observations) for every label, in label order.
///
/// The table is validated first and every observation is resolved before
/// any arithmetic happens, so a failure never yields a partial result.
///
/// Evidence that is zero or non-finite fails with `DegenerateEvidence`.
/// Validation only checks sums, so large or negative entries can still
/// overflow the product. The product is taken in linear space: long
/// observation sets with small conditionals can underflow the evidence to
/// zero and are reported the same way.
// TODO: accumulate likelihoods in log space so underflowing evidence still yields a posterior.
pub fn classify(
    table: &ProbabilityTable,
    config: &ValidationConfig,
    observations: &Observations,
) -> Result<Vec<f64>> {
    trace!("classify - Start: {} observations", observations.len());
    validate(table, config)?;

    let rows = resolve_observations(table, observations)?;
    let likelihood = likelihood(table.label_count(), &rows);
    let priors = table.priors();

    let evidence = priors
        .iter()
        .zip(likelihood.iter())
        .fold(0.0, |acc, (&prior, &factor)| acc + factor * prior);
    debug!("classify - evidence (Z) = {}", evidence);

    if evidence == 0.0 || !evidence.is_finite() {
        warn!("classify - degenerate evidence (Z) = {}", evidence);
        return Err(NaiveBayesError::DegenerateEvidence);
    }

    let posterior: Vec<f64> = priors
        .iter()
        .zip(likelihood.iter())
        .map(|(&prior, &factor)| prior * (factor / evidence))
        .collect();
    trace!("classify - End");
    Ok(posterior)
}

/// Maps each observation to the conditional row of its state, ordered by
/// feature insertion order so that the likelihood product is deterministic.
fn resolve_observations<'a>(
    table: &'a ProbabilityTable,
    observations: &Observations,
) -> Result<Vec<ArrayView1<'a, f64>>> {
    let mut observed: Vec<(&String, &String)> = observations.iter().collect();
    observed.sort();

    let mut positions = Vec::with_capacity(observed.len());
    for (feature, state) in observed {
        let position = table.state_position(feature, state)?;
        debug!("classify - observed {} = {} at {:?}", feature, state, position);
        positions.push(position);
    }
    positions.sort_unstable();

    let features = table.features();
    Ok(positions
        .into_iter()
        .map(|(feature, state)| features[feature].row(state))
        .collect())
}

/// Product of the observed conditionals per label. With no observed rows
/// every entry is 1.
fn likelihood(label_count: usize, rows: &[ArrayView1<'_, f64>]) -> Array1<f64> {
    let mut likelihood = Array1::from_elem(label_count, 1.0);
    for row in rows {
        for (factor, &p) in likelihood.iter_mut().zip(row.iter()) {
            *factor *= p;
        }
    }
    likelihood
}
