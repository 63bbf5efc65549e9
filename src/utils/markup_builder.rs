use crate::types::markup_style::MarkupStyle;

/// A helper for building a redline document in-order from unchanged,
/// deleted and inserted spans.
///
/// Empty deletions and insertions are skipped so the output never contains
/// an empty pair of delimiters.
#[derive(Debug)]
pub struct MarkupBuilder<'a> {
    style: &'a MarkupStyle,
    buffer: String,
}

impl MarkupBuilder<'_> {
    pub fn new(style: &MarkupStyle, capacity: usize) -> MarkupBuilder<'_> {
        MarkupBuilder {
            style,
            buffer: String::with_capacity(capacity),
        }
    }

    /// Copy `text` to the end of the buffer as-is.
    pub fn retain(&mut self, text: &str) { self.buffer.push_str(text); }

    /// Append `text` wrapped in the deletion delimiters.
    pub fn delete(&mut self, text: &str) {
        Self::wrap(
            &mut self.buffer,
            &self.style.delete_open,
            text,
            &self.style.delete_close,
        );
    }

    /// Append `text` wrapped in the insertion delimiters.
    pub fn insert(&mut self, text: &str) {
        Self::wrap(
            &mut self.buffer,
            &self.style.insert_open,
            text,
            &self.style.insert_close,
        );
    }

    fn wrap(buffer: &mut String, open: &str, text: &str, close: &str) {
        if text.is_empty() {
            return;
        }

        buffer.push_str(open);
        buffer.push_str(text);
        buffer.push_str(close);
    }

    /// Returns the built document and clears the buffer.
    pub fn take(&mut self) -> String { std::mem::take(&mut self.buffer) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_markup_builder() {
        let style = MarkupStyle::plain();
        let mut builder = MarkupBuilder::new(&style, 0);

        builder.retain("aaa ");
        builder.delete("bbb");
        builder.insert("ccc");
        builder.retain(" ddd");

        assert_eq!(builder.take(), "aaa [-bbb-]{+ccc+} ddd");
        assert_eq!(builder.take(), "");
    }

    #[test]
    fn test_empty_spans_are_skipped() {
        let style = MarkupStyle::html();
        let mut builder = MarkupBuilder::new(&style, 0);

        builder.delete("");
        builder.insert("");
        builder.retain("");

        assert_eq!(builder.take(), "");
    }

    #[test]
    fn test_unicode() {
        let style = MarkupStyle::plain();
        let mut builder = MarkupBuilder::new(&style, 0);

        builder.retain("こんに");
        builder.insert("世界, ");
        builder.retain("ちは");

        assert_eq!(builder.take(), "こんに{+世界, +}ちは");
    }
}
