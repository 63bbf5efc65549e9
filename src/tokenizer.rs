use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use token::Token;

pub mod character_tokenizer;
pub mod line_tokenizer;
pub mod token;
pub mod word_tokenizer;

/// A tokenizer takes a string and returns a list of tokens whose texts
/// concatenate back to the input.
pub type Tokenizer = dyn Fn(&str) -> Vec<Token>;

/// The granularities at which documents can be compared.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinTokenizer {
    /// Words, single punctuation characters and whitespace runs.
    #[default]
    Word,
    /// Line contents and line endings.
    Line,
    /// Single Unicode scalar values.
    Character,
}

impl Deref for BuiltinTokenizer {
    type Target = Tokenizer;

    fn deref(&self) -> &Self::Target {
        match self {
            BuiltinTokenizer::Word => &word_tokenizer::word_tokenizer,
            BuiltinTokenizer::Line => &line_tokenizer::line_tokenizer,
            BuiltinTokenizer::Character => &character_tokenizer::character_tokenizer,
        }
    }
}

/// Splits `text` into words, punctuation and whitespace runs.
///
/// ```
/// use redline_text::tokenize;
///
/// let tokens = tokenize("don't stop");
/// let texts: Vec<&str> = tokens.iter().map(|token| token.text()).collect();
/// assert_eq!(texts, ["don't", " ", "stop"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> { word_tokenizer::word_tokenizer(text) }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_matrix;

    use super::*;

    #[test_matrix(
        [BuiltinTokenizer::Word, BuiltinTokenizer::Line, BuiltinTokenizer::Character],
        [
            "",
            "plain",
            "Hello, world!\r\n\tIndented  twice\n\n",
            "rock-'n'-roll -- isn't it? ' - '",
            "naïve café 東京 🎉 e\u{301}"
        ]
    )]
    fn test_tokens_concatenate_to_input(tokenizer: BuiltinTokenizer, text: &str) {
        let tokens = tokenizer(text);

        assert!(tokens.iter().all(|token| !token.text().is_empty()));
        assert_eq!(tokens.iter().map(Token::text).collect::<String>(), text);
    }
}
