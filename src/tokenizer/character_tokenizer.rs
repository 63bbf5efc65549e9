use super::token::{Token, TokenKind};

/// Splits text into UTF-8 characters.
///
/// ```not_rust
/// "Hey!" -> ["H", "e", "y", "!"]
/// ```
pub fn character_tokenizer(text: &str) -> Vec<Token> {
    text.chars()
        .map(|c| Token::new(c.to_string(), TokenKind::of(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_character_tokenizer() {
        assert!(character_tokenizer("").is_empty());

        let tokens = character_tokenizer("é, 1");
        assert_eq!(
            tokens
                .iter()
                .map(|token| (token.text(), token.kind()))
                .collect::<Vec<_>>(),
            vec![
                ("é", TokenKind::Word),
                (",", TokenKind::Punctuation),
                (" ", TokenKind::Whitespace),
                ("1", TokenKind::Word),
            ]
        );
    }
}
