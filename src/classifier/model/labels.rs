use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a class label. Assigned on creation and never reused,
/// even when a label with the same name is added again later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelId(Uuid);

impl LabelId {
    fn new() -> Self {
        LabelId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A class label: one of the mutually exclusive outcomes being predicted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLabel {
    pub id: LabelId,
    pub name: String,
}

/// Ordered set of class labels. The position of a label here is the
/// column it occupies in the priors and in every conditional matrix.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    labels: Vec<ClassLabel>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.labels.iter().position(|label| label.name == name)
    }

    pub fn position_of_id(&self, id: LabelId) -> Option<usize> {
        self.labels.iter().position(|label| label.id == id)
    }

    pub fn id_of(&self, name: &str) -> Option<LabelId> {
        self.labels
            .iter()
            .find(|label| label.name == name)
            .map(|label| label.id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, position: usize) -> Option<&ClassLabel> {
        self.labels.get(position)
    }

    /// Append a label, returning its freshly assigned id.
    /// Callers check for duplicates first.
    pub(crate) fn push(&mut self, name: &str) -> LabelId {
        let id = LabelId::new();
        self.labels.push(ClassLabel {
            id,
            name: name.to_string(),
        });
        id
    }

    pub(crate) fn remove(&mut self, position: usize) -> ClassLabel {
        self.labels.remove(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassLabel> {
        self.labels.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.labels.iter().map(|label| label.name.clone()).collect()
    }
}
