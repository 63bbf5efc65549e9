use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The class a token was recognised as. It's informative only, two tokens
/// compare equal based on their text alone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letters, digits and underscores, possibly joined by single `'` or `-`.
    Word,
    /// A maximal run of whitespace, including line endings.
    Whitespace,
    /// Any other single character.
    Punctuation,
    /// The content of a line without its line ending.
    Line,
}

impl TokenKind {
    /// Classifies a single character.
    #[must_use]
    pub fn of(c: char) -> Self {
        if c.is_whitespace() {
            TokenKind::Whitespace
        } else if is_word_char(c) {
            TokenKind::Word
        } else {
            TokenKind::Punctuation
        }
    }
}

pub(crate) fn is_word_char(c: char) -> bool { c.is_alphanumeric() || c == '_' }

/// An indivisible fragment of a document.
///
/// It's UTF-8 compatible.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        let kind = text.chars().next().map_or(TokenKind::Word, TokenKind::of);
        Token::new(text.to_owned(), kind)
    }
}

impl Token {
    #[must_use]
    pub fn new(text: String, kind: TokenKind) -> Self { Token { text, kind } }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn kind(&self) -> TokenKind { self.kind }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool { self.text == other.text }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) { self.text.hash(state); }
}

/// Concatenates the texts of `tokens` without adding any separator.
#[must_use]
pub fn join(tokens: &[Token]) -> String { tokens.iter().map(Token::text).collect() }
