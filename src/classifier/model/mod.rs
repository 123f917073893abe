pub mod feature;
pub mod labels;
pub mod snapshot;
pub mod table;

/// Placeholder probability given to new priors and conditionals.
/// Tables are expected to be normalized through `set_prior` and
/// `set_conditional` before inference.
pub const DEFAULT_PROBABILITY: f64 = 1.0;

pub use feature::Feature;
pub use labels::{ClassLabel, LabelId, LabelIndex};
pub use snapshot::{FeatureSnapshot, LabelSnapshot, ModelSnapshot, StateSnapshot};
pub use table::ProbabilityTable;
