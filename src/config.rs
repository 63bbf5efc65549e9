use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::errors::RedlineError;
use crate::{alignment::Algorithm, tokenizer::BuiltinTokenizer, types::markup_style::MarkupStyle};

/// Default limit on the number of tokens per side. Roughly a 150-page
/// document when tokenized by words.
pub const DEFAULT_MAX_TOKENS: usize = 200_000;

/// Default limit on the token comparisons made while aligning. A few seconds
/// of work; repetitive text reaches it well before `DEFAULT_MAX_TOKENS`.
pub const DEFAULT_MAX_COMPARISONS: usize = 50_000_000;

/// Settings of `redline_with_config`.
///
/// With the `serde` feature enabled, missing fields fall back to their
/// defaults when deserializing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedlineConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_tokenizer"))]
    pub tokenizer: BuiltinTokenizer,

    #[cfg_attr(feature = "serde", serde(default = "default_algorithm"))]
    pub algorithm: Algorithm,

    #[cfg_attr(feature = "serde", serde(default = "default_markup"))]
    pub markup: MarkupStyle,

    /// Inputs with more tokens than this on either side are rejected instead
    /// of being aligned. `None` disables the check.
    #[cfg_attr(feature = "serde", serde(default = "default_max_tokens"))]
    pub max_tokens: Option<usize>,

    /// Alignments needing more token comparisons than this are abandoned.
    /// `None` disables the check.
    #[cfg_attr(feature = "serde", serde(default = "default_max_comparisons"))]
    pub max_comparisons: Option<usize>,
}

fn default_tokenizer() -> BuiltinTokenizer {
    debug!("Using default tokenizer: {:?}", BuiltinTokenizer::default());
    BuiltinTokenizer::default()
}

fn default_algorithm() -> Algorithm {
    debug!("Using default algorithm: {:?}", Algorithm::default());
    Algorithm::default()
}

fn default_markup() -> MarkupStyle {
    debug!("Using default HTML markup");
    MarkupStyle::default()
}

#[allow(clippy::unnecessary_wraps)]
fn default_max_tokens() -> Option<usize> {
    debug!("Using default max tokens: {DEFAULT_MAX_TOKENS}");
    Some(DEFAULT_MAX_TOKENS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_max_comparisons() -> Option<usize> {
    debug!("Using default max comparisons: {DEFAULT_MAX_COMPARISONS}");
    Some(DEFAULT_MAX_COMPARISONS)
}

impl Default for RedlineConfig {
    fn default() -> Self {
        Self {
            tokenizer: default_tokenizer(),
            algorithm: default_algorithm(),
            markup: default_markup(),
            max_tokens: default_max_tokens(),
            max_comparisons: default_max_comparisons(),
        }
    }
}

impl RedlineConfig {
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: BuiltinTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_markup(mut self, markup: MarkupStyle) -> Self {
        self.markup = markup;
        self
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: Option<usize>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn with_max_comparisons(mut self, max_comparisons: Option<usize>) -> Self {
        self.max_comparisons = max_comparisons;
        self
    }

    /// Parses a YAML configuration, using defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns `RedlineError::InvalidConfig` if `yaml` isn't a valid
    /// configuration.
    #[cfg(feature = "serde")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RedlineError> {
        serde_yaml::from_str(yaml).map_err(|error| RedlineError::InvalidConfig(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builder() {
        let config = RedlineConfig::default()
            .with_tokenizer(BuiltinTokenizer::Line)
            .with_algorithm(Algorithm::Myers)
            .with_markup(MarkupStyle::plain())
            .with_max_tokens(None)
            .with_max_comparisons(Some(1_000));

        assert_eq!(
            config,
            RedlineConfig {
                tokenizer: BuiltinTokenizer::Line,
                algorithm: Algorithm::Myers,
                markup: MarkupStyle::plain(),
                max_tokens: None,
                max_comparisons: Some(1_000),
            }
        );
    }

    #[test]
    fn test_defaults() {
        let config = RedlineConfig::default();

        assert_eq!(config.tokenizer, BuiltinTokenizer::Word);
        assert_eq!(config.algorithm, Algorithm::LongestMatch);
        assert_eq!(config.markup, MarkupStyle::html());
        assert_eq!(config.max_tokens, Some(DEFAULT_MAX_TOKENS));
        assert_eq!(config.max_comparisons, Some(DEFAULT_MAX_COMPARISONS));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_yaml() {
        let config = RedlineConfig::from_yaml_str(
            "tokenizer: Line\nmax_tokens: 10\nmax_comparisons: ~\nmarkup:\n  insert_open: '<ins>'\n  insert_close: '</ins>'\n",
        )
        .unwrap();

        assert_eq!(config.tokenizer, BuiltinTokenizer::Line);
        assert_eq!(config.algorithm, Algorithm::LongestMatch);
        assert_eq!(config.max_tokens, Some(10));
        assert_eq!(config.max_comparisons, None);
        assert_eq!(config.markup.insert_open, "<ins>");
        assert_eq!(config.markup.delete_open, MarkupStyle::html().delete_open);

        assert_eq!(RedlineConfig::from_yaml_str("{}").unwrap(), RedlineConfig::default());
        assert!(matches!(
            RedlineConfig::from_yaml_str("tokenizer: Sentence"),
            Err(RedlineError::InvalidConfig(_))
        ));
    }
}
