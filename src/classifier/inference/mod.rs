pub mod classifier;
pub mod engine;
pub mod posterior;
pub mod validator;

pub use classifier::NaiveBayesClassifier;
pub use engine::Observations;
pub use posterior::Posterior;
