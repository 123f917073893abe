use serde::Serialize;

/// Posterior distribution over class labels, kept in label order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posterior {
    labels: Vec<String>,
    probabilities: Vec<f64>,
}

impl Posterior {
    pub(crate) fn new(labels: Vec<String>, probabilities: Vec<f64>) -> Self {
        Posterior {
            labels,
            probabilities,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|position| self.probabilities[position])
    }

    /// The label with the highest posterior; the earliest label wins ties
    pub fn most_probable(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (label, &p) in self.iter() {
            match best {
                Some((_, best_p)) if p <= best_p => {}
                _ => best = Some((label, p)),
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.probabilities.iter())
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.probabilities
    }
}
