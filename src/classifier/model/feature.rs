use super::DEFAULT_PROBABILITY;
use crate::classifier::common::error::Result;
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// An observable discrete variable with an ordered set of states.
///
/// Conditionals are stored as a `(states, labels)` matrix: row `s` holds
/// P(state s | label) for every label column.
#[derive(Debug, Clone)]
pub struct Feature {
    name: String,
    states: Vec<String>,
    conditionals: Array2<f64>,
}

impl Feature {
    pub(crate) fn new(name: &str, label_count: usize) -> Self {
        Feature {
            name: name.to_string(),
            states: Vec::new(),
            conditionals: Array2::from_elem((0, label_count), DEFAULT_PROBABILITY),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn state_position(&self, state: &str) -> Option<usize> {
        self.states.iter().position(|s| s == state)
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.state_position(state).is_some()
    }

    /// Conditional vector of the state at `position`, one entry per label
    pub fn row(&self, position: usize) -> ArrayView1<'_, f64> {
        self.conditionals.row(position)
    }

    /// Sum over all states of the conditional at label column `label`,
    /// accumulated in state order.
    pub fn column_sum(&self, label: usize) -> f64 {
        self.conditionals
            .column(label)
            .iter()
            .fold(0.0, |acc, &p| acc + p)
    }

    pub(crate) fn push_state(&mut self, state: &str) -> Result<()> {
        let row = Array1::from_elem(self.conditionals.ncols(), DEFAULT_PROBABILITY);
        self.conditionals.push_row(row.view())?;
        self.states.push(state.to_string());
        Ok(())
    }

    pub(crate) fn remove_state(&mut self, position: usize) {
        self.conditionals.remove_index(Axis(0), position);
        self.states.remove(position);
    }

    pub(crate) fn set(&mut self, state: usize, label: usize, probability: f64) {
        self.conditionals[[state, label]] = probability;
    }

    pub fn get(&self, state: usize, label: usize) -> f64 {
        self.conditionals[[state, label]]
    }

    /// A copy of the conditional matrix with one more label column appended.
    /// Staged so that adding a label can fail without touching any feature.
    pub(crate) fn with_label_column(&self) -> Result<Array2<f64>> {
        let mut extended = self.conditionals.clone();
        let column = Array1::from_elem(extended.nrows(), DEFAULT_PROBABILITY);
        extended.push_column(column.view())?;
        Ok(extended)
    }

    pub(crate) fn replace_conditionals(&mut self, conditionals: Array2<f64>) {
        self.conditionals = conditionals;
    }

    pub(crate) fn splice_label_column(&mut self, label: usize) {
        self.conditionals.remove_index(Axis(1), label);
    }

    pub(crate) fn label_columns(&self) -> usize {
        self.conditionals.ncols()
    }
}
