use super::table::ProbabilityTable;
use crate::classifier::common::error::{NaiveBayesError, Result};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// A class label together with its prior probability
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LabelSnapshot {
    pub name: String,
    pub prior: f64,
}

/// A feature state with one conditional probability per label, in label order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    pub name: String,
    pub conditionals: Vec<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeatureSnapshot {
    pub name: String,
    #[serde(default)]
    pub states: Vec<StateSnapshot>,
}

/// Serializable copy of a whole probability table
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelSnapshot {
    /// Version for format compatibility
    pub version: u32,
    /// Timestamp when the snapshot was taken
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub labels: Vec<LabelSnapshot>,
    #[serde(default)]
    pub features: Vec<FeatureSnapshot>,
}

impl ModelSnapshot {
    pub const CURRENT_VERSION: u32 = 1;
}

impl ProbabilityTable {
    pub fn snapshot(&self) -> ModelSnapshot {
        let priors = self.priors();
        let labels = self
            .label_index()
            .iter()
            .zip(priors.iter())
            .map(|(label, &prior)| LabelSnapshot {
                name: label.name.clone(),
                prior,
            })
            .collect();

        let features = self
            .features()
            .iter()
            .map(|feature| FeatureSnapshot {
                name: feature.name().to_string(),
                states: feature
                    .states()
                    .iter()
                    .enumerate()
                    .map(|(position, state)| StateSnapshot {
                        name: state.clone(),
                        conditionals: feature.row(position).to_vec(),
                    })
                    .collect(),
            })
            .collect();

        ModelSnapshot {
            version: ModelSnapshot::CURRENT_VERSION,
            saved_at: Utc::now(),
            labels,
            features,
        }
    }

    /// Rebuilds a table through the mutation API. The result is not
    /// validated: a snapshot may hold an unnormalized work-in-progress model.
    pub fn from_snapshot(snapshot: &ModelSnapshot) -> Result<Self> {
        if snapshot.version != ModelSnapshot::CURRENT_VERSION {
            return Err(NaiveBayesError::MalformedSnapshot(format!(
                "unsupported version {} (expected {})",
                snapshot.version,
                ModelSnapshot::CURRENT_VERSION
            )));
        }

        let mut table = ProbabilityTable::new();
        for label in &snapshot.labels {
            table.add_label(&label.name)?;
            table.set_prior(&label.name, label.prior)?;
        }

        let label_count = snapshot.labels.len();
        for feature in &snapshot.features {
            table.add_feature(&feature.name)?;
            for state in &feature.states {
                if state.conditionals.len() != label_count {
                    return Err(NaiveBayesError::MalformedSnapshot(format!(
                        "state \"{}\" of feature \"{}\" has {} conditionals for {} labels",
                        state.name,
                        feature.name,
                        state.conditionals.len(),
                        label_count
                    )));
                }
                table.add_state(&feature.name, &state.name)?;
                for (label, &probability) in snapshot.labels.iter().zip(&state.conditionals) {
                    table.set_conditional(&feature.name, &state.name, &label.name, probability)?;
                }
            }
        }

        debug!(
            "Restored table with {} labels and {} features",
            table.label_count(),
            table.feature_count()
        );
        Ok(table)
    }
}
