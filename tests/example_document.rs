use pretty_assertions::assert_eq;
use serde::Deserialize;

/// A baseline and revised pair with the redline expected in the plain
/// markup style.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleDocument {
    name: String,
    baseline: String,
    revised: String,
    expected: Option<String>,
}

impl ExampleDocument {
    pub fn name(&self) -> &str { &self.name }

    pub fn baseline(&self) -> &str { &self.baseline }

    pub fn revised(&self) -> &str { &self.revised }

    pub fn assert_expected(&self, actual: &str) {
        if let Some(expected) = &self.expected {
            assert_eq!(
                actual,
                expected.as_str(),
                "Unexpected redline for example '{}'",
                self.name
            );
        }
    }
}
