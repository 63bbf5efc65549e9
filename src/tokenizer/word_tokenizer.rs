use super::token::{Token, TokenKind, is_word_char};

/// Splits text into words, single punctuation characters and whitespace runs.
///
/// A word may contain single apostrophes or hyphens as long as they sit
/// between two word characters. Any other punctuation, including a leading,
/// trailing or doubled connector, becomes a token of its own.
///
/// ## Example
///
/// ```not_rust
/// "Hi there, it's -me!" -> ["Hi", " ", "there", ",", " ", "it's", " ", "-", "me", "!"]
/// ```
pub fn word_tokenizer(text: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut rest = text;

    while let Some(first) = rest.chars().next() {
        let (length, kind) = if first.is_whitespace() {
            (run_length(rest, char::is_whitespace), TokenKind::Whitespace)
        } else if is_word_char(first) {
            (word_length(rest), TokenKind::Word)
        } else {
            (first.len_utf8(), TokenKind::Punctuation)
        };

        let (token, tail) = rest.split_at(length);
        result.push(Token::new(token.to_owned(), kind));
        rest = tail;
    }

    result
}

fn is_connector(c: char) -> bool { c == '\'' || c == '-' }

/// Byte length of the longest prefix of `text` made of characters matching
/// `predicate`.
fn run_length(text: &str, predicate: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !predicate(c))
        .map_or(text.len(), |(i, _)| i)
}

/// Byte length of the word starting at the beginning of `text`.
fn word_length(text: &str) -> usize {
    let mut length = run_length(text, is_word_char);

    loop {
        let mut tail = text[length..].chars();
        match (tail.next(), tail.next()) {
            (Some(connector), Some(next)) if is_connector(connector) && is_word_char(next) => {
                length += connector.len_utf8();
                length += run_length(&text[length..], is_word_char);
            }
            _ => return length,
        }
    }
}
