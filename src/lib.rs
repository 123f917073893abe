pub mod classifier;

pub use classifier::common::{Distribution, EntityKind};
pub use classifier::{
    LabelId, ModelSnapshot, NaiveBayesClassifier, NaiveBayesError, Observations, Posterior,
    ProbabilityTable, ValidationConfig,
};
