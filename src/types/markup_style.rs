#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The delimiters wrapped around deleted and inserted spans.
///
/// The default produces coloured HTML, ready to be embedded into a rendered
/// Markdown or HTML document:
///
/// ```not_rust
/// <span style="color:#c00000"><del>old</del></span><span style="color:#008000"><add>new</add></span>
/// ```
///
/// Token content is never escaped, so text that already contains one of the
/// delimiters can't be told apart from markup when reading it back.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupStyle {
    pub delete_open: String,
    pub delete_close: String,
    pub insert_open: String,
    pub insert_close: String,
}

impl Default for MarkupStyle {
    fn default() -> Self { Self::html() }
}

impl MarkupStyle {
    #[must_use]
    pub fn new(
        delete_open: impl Into<String>,
        delete_close: impl Into<String>,
        insert_open: impl Into<String>,
        insert_close: impl Into<String>,
    ) -> Self {
        MarkupStyle {
            delete_open: delete_open.into(),
            delete_close: delete_close.into(),
            insert_open: insert_open.into(),
            insert_close: insert_close.into(),
        }
    }

    /// Red `<del>` and green `<add>` elements wrapped in coloured spans.
    #[must_use]
    pub fn html() -> Self {
        Self::new(
            r#"<span style="color:#c00000"><del>"#,
            "</del></span>",
            r#"<span style="color:#008000"><add>"#,
            "</add></span>",
        )
    }

    /// `[-deleted-]` and `{+inserted+}`, as `git diff --word-diff` prints them.
    #[must_use]
    pub fn plain() -> Self { Self::new("[-", "-]", "{+", "+}") }

    pub(crate) fn delimiters(&self) -> [&str; 4] {
        [
            self.delete_open.as_str(),
            self.delete_close.as_str(),
            self.insert_open.as_str(),
            self.insert_close.as_str(),
        ]
    }
}
