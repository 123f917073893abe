use std::fmt;
use thiserror::Error;

/// The kind of named entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Label,
    Feature,
    State,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Label => "Label",
            EntityKind::Feature => "Feature",
            EntityKind::State => "State",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies which probability distribution failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Distribution {
    /// The prior distribution over class labels
    Priors,
    /// The distribution over the states of `feature` given `label`
    Conditional { feature: String, label: String },
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Priors => write!(f, "prior probabilities"),
            Distribution::Conditional { feature, label } => {
                write!(f, "conditional probabilities of {} given {}", feature, label)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum NaiveBayesError {
    #[error("{kind} already exists (\"{name}\"{})", in_scope(.scope))]
    DuplicateKey {
        kind: EntityKind,
        name: String,
        /// Owning feature, for states
        scope: Option<String>,
    },

    #[error("{kind} does not exist (\"{name}\"{})", in_scope(.scope))]
    NotFound {
        kind: EntityKind,
        name: String,
        scope: Option<String>,
    },

    #[error("The sum of {distribution} is {sum} (should be 1.0)")]
    InconsistentModel { distribution: Distribution, sum: f64 },

    /// The normalizing constant of the observations is zero or non-finite
    #[error("Evidence for the observations is zero or non-finite")]
    DegenerateEvidence,

    #[error("Malformed model snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("Table shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn in_scope(scope: &Option<String>) -> String {
    match scope {
        Some(feature) => format!(" in \"{}\"", feature),
        None => String::new(),
    }
}

impl NaiveBayesError {
    pub fn duplicate(kind: EntityKind, name: &str) -> Self {
        NaiveBayesError::DuplicateKey {
            kind,
            name: name.to_string(),
            scope: None,
        }
    }

    pub fn duplicate_state(feature: &str, state: &str) -> Self {
        NaiveBayesError::DuplicateKey {
            kind: EntityKind::State,
            name: state.to_string(),
            scope: Some(feature.to_string()),
        }
    }

    pub fn not_found(kind: EntityKind, name: &str) -> Self {
        NaiveBayesError::NotFound {
            kind,
            name: name.to_string(),
            scope: None,
        }
    }

    pub fn state_not_found(feature: &str, state: &str) -> Self {
        NaiveBayesError::NotFound {
            kind: EntityKind::State,
            name: state.to_string(),
            scope: Some(feature.to_string()),
        }
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, NaiveBayesError::DuplicateKey { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, NaiveBayesError::NotFound { .. })
    }

    pub fn is_inconsistent_model(&self) -> bool {
        matches!(self, NaiveBayesError::InconsistentModel { .. })
    }
}

pub type Result<T> = std::result::Result<T, NaiveBayesError>;
