use super::feature::Feature;
use super::labels::{LabelId, LabelIndex};
use super::DEFAULT_PROBABILITY;
use crate::classifier::common::error::{EntityKind, NaiveBayesError, Result};
use log::trace;
use ndarray::{aview1, Array1, Axis};

/// Class labels, priors and per-feature conditional probabilities.
///
/// Every array in the table shares one label axis whose positions come from
/// the [`LabelIndex`]. Only `add_label` and `remove_label` change that axis,
/// and they change it for the priors and every feature together.
#[derive(Debug, Clone)]
pub struct ProbabilityTable {
    labels: LabelIndex,
    priors: Array1<f64>,
    features: Vec<Feature>,
}

impl Default for ProbabilityTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbabilityTable {
    pub fn new() -> Self {
        ProbabilityTable {
            labels: LabelIndex::new(),
            priors: Array1::zeros(0),
            features: Vec::new(),
        }
    }

    /// True when the table has no labels and no features
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.features.is_empty()
    }

    // Labels

    pub fn add_label(&mut self, name: &str) -> Result<LabelId> {
        trace!("add_label - Start: {}", name);
        if self.labels.contains(name) {
            return Err(NaiveBayesError::duplicate(EntityKind::Label, name));
        }

        let mut priors = self.priors.clone();
        priors.append(Axis(0), aview1(&[DEFAULT_PROBABILITY]))?;
        let extended = self
            .features
            .iter()
            .map(|feature| feature.with_label_column())
            .collect::<Result<Vec<_>>>()?;

        self.priors = priors;
        for (feature, conditionals) in self.features.iter_mut().zip(extended) {
            feature.replace_conditionals(conditionals);
        }
        let id = self.labels.push(name);
        trace!("add_label - End: {} has id {}", name, id);
        Ok(id)
    }

    pub fn remove_label(&mut self, name: &str) -> Result<()> {
        trace!("remove_label - Start: {}", name);
        let position = self.label_position(name)?;
        self.splice_label(position);
        trace!("remove_label - End: removed {} at position {}", name, position);
        Ok(())
    }

    /// Compacts the label axis: drops `position` from the label index, the
    /// priors and every feature's conditional matrix.
    fn splice_label(&mut self, position: usize) {
        self.labels.remove(position);
        self.priors.remove_index(Axis(0), position);
        for feature in &mut self.features {
            feature.splice_label_column(position);
        }
    }

    pub fn label_id(&self, name: &str) -> Result<LabelId> {
        self.labels
            .id_of(name)
            .ok_or_else(|| NaiveBayesError::not_found(EntityKind::Label, name))
    }

    pub fn label_name(&self, id: LabelId) -> Option<&str> {
        self.labels
            .position_of_id(id)
            .and_then(|position| self.labels.get(position))
            .map(|label| label.name.as_str())
    }

    pub fn contains_label(&self, name: &str) -> bool {
        self.labels.contains(name)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn get_labels(&self) -> Vec<String> {
        self.labels.names()
    }

    pub fn label_index(&self) -> &LabelIndex {
        &self.labels
    }

    pub(crate) fn label_position(&self, name: &str) -> Result<usize> {
        self.labels
            .position(name)
            .ok_or_else(|| NaiveBayesError::not_found(EntityKind::Label, name))
    }

    // Features

    pub fn add_feature(&mut self, name: &str) -> Result<()> {
        trace!("add_feature - Start: {}", name);
        if self.contains_feature(name) {
            return Err(NaiveBayesError::duplicate(EntityKind::Feature, name));
        }
        self.features.push(Feature::new(name, self.labels.len()));
        trace!("add_feature - End");
        Ok(())
    }

    pub fn remove_feature(&mut self, name: &str) -> Result<()> {
        trace!("remove_feature - Start: {}", name);
        let position = self.feature_position(name)?;
        self.features.remove(position);
        trace!("remove_feature - End");
        Ok(())
    }

    pub fn contains_feature(&self, name: &str) -> bool {
        self.features.iter().any(|feature| feature.name() == name)
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn get_features(&self) -> Vec<String> {
        self.features
            .iter()
            .map(|feature| feature.name().to_string())
            .collect()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn feature(&self, name: &str) -> Result<&Feature> {
        self.features
            .iter()
            .find(|feature| feature.name() == name)
            .ok_or_else(|| NaiveBayesError::not_found(EntityKind::Feature, name))
    }

    fn feature_position(&self, name: &str) -> Result<usize> {
        self.features
            .iter()
            .position(|feature| feature.name() == name)
            .ok_or_else(|| NaiveBayesError::not_found(EntityKind::Feature, name))
    }

    // States

    pub fn add_state(&mut self, feature: &str, state: &str) -> Result<()> {
        trace!("add_state - Start: {} = {}", feature, state);
        let position = self.feature_position(feature)?;
        let target = &mut self.features[position];
        if target.contains_state(state) {
            return Err(NaiveBayesError::duplicate_state(feature, state));
        }
        target.push_state(state)?;
        trace!("add_state - End");
        Ok(())
    }

    pub fn remove_state(&mut self, feature: &str, state: &str) -> Result<()> {
        trace!("remove_state - Start: {} = {}", feature, state);
        let (feature_position, state_position) = self.state_position(feature, state)?;
        self.features[feature_position].remove_state(state_position);
        trace!("remove_state - End");
        Ok(())
    }

    pub fn contains_state(&self, feature: &str, state: &str) -> bool {
        self.feature(feature)
            .map(|f| f.contains_state(state))
            .unwrap_or(false)
    }

    pub fn state_count(&self, feature: &str) -> Result<usize> {
        Ok(self.feature(feature)?.state_count())
    }

    pub fn get_states(&self, feature: &str) -> Result<Vec<String>> {
        Ok(self.feature(feature)?.states().to_vec())
    }

    /// Resolves a (feature, state) pair to its row in the feature's matrix
    pub(crate) fn state_position(&self, feature: &str, state: &str) -> Result<(usize, usize)> {
        let feature_position = self.feature_position(feature)?;
        let state_position = self.features[feature_position]
            .state_position(state)
            .ok_or_else(|| NaiveBayesError::state_not_found(feature, state))?;
        Ok((feature_position, state_position))
    }

    // Probabilities

    pub fn set_prior(&mut self, label: &str, probability: f64) -> Result<()> {
        trace!("set_prior - {} = {}", label, probability);
        let position = self.label_position(label)?;
        self.priors[position] = probability;
        Ok(())
    }

    pub fn get_prior(&self, label: &str) -> Result<f64> {
        let position = self.label_position(label)?;
        Ok(self.priors[position])
    }

    pub fn get_priors(&self) -> Vec<f64> {
        self.priors.to_vec()
    }

    pub(crate) fn priors(&self) -> &Array1<f64> {
        &self.priors
    }

    pub fn set_conditional(
        &mut self,
        feature: &str,
        state: &str,
        label: &str,
        probability: f64,
    ) -> Result<()> {
        trace!(
            "set_conditional - P({} = {} | {}) = {}",
            feature,
            state,
            label,
            probability
        );
        let (feature_position, state_position) = self.state_position(feature, state)?;
        let label_position = self.label_position(label)?;
        self.features[feature_position].set(state_position, label_position, probability);
        Ok(())
    }

    pub fn get_conditional(&self, feature: &str, state: &str, label: &str) -> Result<f64> {
        let (feature_position, state_position) = self.state_position(feature, state)?;
        let label_position = self.label_position(label)?;
        Ok(self.features[feature_position].get(state_position, label_position))
    }

    pub fn get_conditionals(&self, feature: &str, state: &str) -> Result<Vec<f64>> {
        let (feature_position, state_position) = self.state_position(feature, state)?;
        Ok(self.features[feature_position].row(state_position).to_vec())
    }

    /// Checks that the label axis of the priors and every feature matrix
    /// has one entry per label.
    pub fn is_shaped(&self) -> bool {
        let labels = self.labels.len();
        self.priors.len() == labels
            && self
                .features
                .iter()
                .all(|feature| feature.label_columns() == labels)
    }
}
