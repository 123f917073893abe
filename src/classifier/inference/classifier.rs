use super::engine::{self, Observations};
use super::posterior::Posterior;
use super::validator;
use crate::classifier::common::config::ValidationConfig;
use crate::classifier::common::error::Result;
use crate::classifier::model::{LabelId, ModelSnapshot, ProbabilityTable};
use anyhow::Context;
use log::info;
use std::fs;
use std::path::Path;

/// Discrete-feature Naive Bayes classifier.
///
/// Add class labels, features with any number of states, prior and
/// conditional probabilities, then compute the probability of each class
/// label given observed features.
///
/// # Example
/// ```
/// # use naivebayes::NaiveBayesClassifier;
/// # use std::collections::HashMap;
/// # fn main() -> Result<(), naivebayes::NaiveBayesError> {
/// let mut c = NaiveBayesClassifier::new();
/// c.add_label("Flu")?;
/// c.add_label("No disease")?;
/// c.add_feature("Fever")?;
/// c.add_state("Fever", "yes")?;
/// c.add_state("Fever", "no")?;
///
/// c.set_prior("Flu", 0.1)?;
/// c.set_prior("No disease", 0.9)?;
/// c.set_conditional("Fever", "yes", "Flu", 0.9)?;
/// c.set_conditional("Fever", "no", "Flu", 0.1)?;
/// c.set_conditional("Fever", "yes", "No disease", 0.01)?;
/// c.set_conditional("Fever", "no", "No disease", 0.99)?;
///
/// let observations = HashMap::from([("Fever".to_string(), "yes".to_string())]);
/// let posterior = c.classify(&observations)?;
/// assert!(posterior[0] > posterior[1]);
/// # Ok(())
/// # }
/// ```
///
/// The classifier holds no locks. Share it between threads behind a
/// `Mutex` or `RwLock` held for the whole mutation or `classify` call.
#[derive(Debug, Clone, Default)]
pub struct NaiveBayesClassifier {
    table: ProbabilityTable,
    config: ValidationConfig,
}

impl NaiveBayesClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        NaiveBayesClassifier {
            table: ProbabilityTable::new(),
            config,
        }
    }

    pub fn from_table(table: ProbabilityTable, config: ValidationConfig) -> Self {
        NaiveBayesClassifier { table, config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ValidationConfig) {
        self.config = config;
    }

    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    pub fn into_table(self) -> ProbabilityTable {
        self.table
    }

    pub fn add_label(&mut self, name: &str) -> Result<LabelId> {
        self.table.add_label(name)
    }

    pub fn remove_label(&mut self, name: &str) -> Result<()> {
        self.table.remove_label(name)
    }

    pub fn add_feature(&mut self, name: &str) -> Result<()> {
        self.table.add_feature(name)
    }

    pub fn remove_feature(&mut self, name: &str) -> Result<()> {
        self.table.remove_feature(name)
    }

    pub fn add_state(&mut self, feature: &str, state: &str) -> Result<()> {
        self.table.add_state(feature, state)
    }

    pub fn remove_state(&mut self, feature: &str, state: &str) -> Result<()> {
        self.table.remove_state(feature, state)
    }

    /// Set the prior probability of a class label. The priors are what
    /// `classify` returns when nothing is observed.
    pub fn set_prior(&mut self, label: &str, probability: f64) -> Result<()> {
        self.table.set_prior(label, probability)
    }

    /// Set P(feature = state | label)
    pub fn set_conditional(
        &mut self,
        feature: &str,
        state: &str,
        label: &str,
        probability: f64,
    ) -> Result<()> {
        self.table.set_conditional(feature, state, label, probability)
    }

    pub fn get_labels(&self) -> Vec<String> {
        self.table.get_labels()
    }

    pub fn get_features(&self) -> Vec<String> {
        self.table.get_features()
    }

    pub fn get_states(&self, feature: &str) -> Result<Vec<String>> {
        self.table.get_states(feature)
    }

    pub fn get_priors(&self) -> Vec<f64> {
        self.table.get_priors()
    }

    pub fn get_prior(&self, label: &str) -> Result<f64> {
        self.table.get_prior(label)
    }

    pub fn get_conditionals(&self, feature: &str, state: &str) -> Result<Vec<f64>> {
        self.table.get_conditionals(feature, state)
    }

    pub fn get_conditional(&self, feature: &str, state: &str, label: &str) -> Result<f64> {
        self.table.get_conditional(feature, state, label)
    }

    /// Examines the consistency of prior and conditional probabilities.
    /// `classify` runs this first.
    pub fn validate(&self) -> Result<()> {
        validator::validate(&self.table, &self.config)
    }

    /// Probability distribution over the class labels, in label order,
    /// given the observed feature states.
    pub fn classify(&self, observations: &Observations) -> Result<Vec<f64>> {
        engine::classify(&self.table, &self.config, observations)
    }

    /// Like `classify`, with each probability paired with its label
    pub fn posterior(&self, observations: &Observations) -> Result<Posterior> {
        let probabilities = self.classify(observations)?;
        Ok(Posterior::new(self.table.get_labels(), probabilities))
    }

    pub fn snapshot(&self) -> ModelSnapshot {
        self.table.snapshot()
    }

    pub fn from_snapshot(snapshot: &ModelSnapshot, config: ValidationConfig) -> Result<Self> {
        let table = ProbabilityTable::from_snapshot(snapshot)?;
        Ok(Self::from_table(table, config))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    pub fn from_json(json: &str, config: ValidationConfig) -> Result<Self> {
        let snapshot: ModelSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(&snapshot, config)
    }

    /// Save the current model to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        info!("Saving classifier to file: {}", path.display());
        let json = self.to_json().context("Failed to serialize classifier")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write model file {}", path.display()))?;
        Ok(())
    }

    /// Load a model previously written by `save_to_file`
    pub fn load_from_file<P: AsRef<Path>>(path: P, config: ValidationConfig) -> anyhow::Result<Self> {
        let path = path.as_ref();
        info!("Loading classifier from file: {}", path.display());
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model file {}", path.display()))?;
        let classifier = Self::from_json(&json, config)
            .with_context(|| format!("Failed to load model from {}", path.display()))?;
        Ok(classifier)
    }
}
