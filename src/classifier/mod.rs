pub mod common;
pub mod inference;
pub mod model;

/// Exports the main types for easy access
pub use common::{NaiveBayesError, Result, ValidationConfig};
pub use inference::{NaiveBayesClassifier, Observations, Posterior};
pub use model::{LabelId, ModelSnapshot, ProbabilityTable};
