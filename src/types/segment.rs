#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A piece of a redline document read back from its markup.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Unchanged(String),
    Deleted(String),
    Inserted(String),
}

impl Segment {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Segment::Unchanged(text) | Segment::Deleted(text) | Segment::Inserted(text) => text,
        }
    }
}
