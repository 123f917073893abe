pub mod config;
pub mod error;

// Re-export key types
pub use config::ValidationConfig;
pub use error::{Distribution, EntityKind, NaiveBayesError, Result};
