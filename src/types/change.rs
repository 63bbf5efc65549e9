#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Addition,
    Deletion,
    /// A deletion immediately followed by an insertion.
    Replacement,
}

/// A single suggestion found in a redline document that can be accepted or
/// rejected on its own.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Sequential number of the change in document order, starting at 0.
    pub id: usize,
    pub kind: ChangeKind,
    /// The baseline text, empty for additions.
    pub original_text: String,
    /// The revised text, empty for deletions.
    pub new_text: String,
}

/// What to do with a `Change` when resolving a redline document.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Keep the revised text.
    Accept,
    /// Keep the baseline text.
    Reject,
    /// Replace the change with custom text.
    Edit(String),
}

impl Change {
    /// The text that ends up in the resolved document.
    #[must_use]
    pub fn resolve(&self, decision: &Decision) -> String {
        match decision {
            Decision::Accept => self.new_text.clone(),
            Decision::Reject => self.original_text.clone(),
            Decision::Edit(text) => text.clone(),
        }
    }
}
