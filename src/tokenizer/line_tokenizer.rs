use super::token::{Token, TokenKind};

/// Splits text into lines, keeping line endings as separate tokens.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello", "\n", "World!"]
/// "Line 1\r\nLine 2" -> ["Line 1", "\r\n", "Line 2"]
/// ```
pub fn line_tokenizer(text: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut line_start = 0;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let ending_length = match c {
            '\n' => 1,
            '\r' if chars.peek() == Some(&(i + 1, '\n')) => {
                chars.next();
                2
            }
            _ => continue,
        };

        if i > line_start {
            result.push(Token::new(text[line_start..i].to_owned(), TokenKind::Line));
        }
        result.push(Token::new(
            text[i..i + ending_length].to_owned(),
            TokenKind::Whitespace,
        ));
        line_start = i + ending_length;
    }

    if line_start < text.len() {
        result.push(Token::new(text[line_start..].to_owned(), TokenKind::Line));
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("", &[] ; "empty")]
    #[test_case("Hello", &["Hello"] ; "single line")]
    #[test_case("Hello\nWorld", &["Hello", "\n", "World"] ; "two lines")]
    #[test_case("Hello\nWorld\n", &["Hello", "\n", "World", "\n"] ; "trailing newline")]
    #[test_case("Line 1\r\nLine 2", &["Line 1", "\r\n", "Line 2"] ; "crlf")]
    #[test_case("lone\rcarriage", &["lone\rcarriage"] ; "lone carriage return")]
    #[test_case("\n\n", &["\n", "\n"] ; "only newlines")]
    #[test_case("Start\n\nEnd", &["Start", "\n", "\n", "End"] ; "blank line")]
    fn test_line_tokenizer(text: &str, expected: &[&str]) {
        let tokens = line_tokenizer(text);

        assert_eq!(tokens.iter().map(Token::text).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_kinds() {
        let kinds = line_tokenizer("a\r\nb")
            .iter()
            .map(Token::kind)
            .collect::<Vec<_>>();

        assert_eq!(
            kinds,
            vec![TokenKind::Line, TokenKind::Whitespace, TokenKind::Line]
        );
    }
}
