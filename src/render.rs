use crate::{
    alignment::{EditOperation, Tag},
    tokenizer::token::Token,
    types::markup_style::MarkupStyle,
    utils::markup_builder::MarkupBuilder,
};

/// Builds the redline document described by `operations`.
///
/// Unchanged spans are copied from `baseline` verbatim. Deleted spans are
/// wrapped in the deletion delimiters of `style` and inserted spans in its
/// insertion delimiters. A replacement is written as its deletion directly
/// followed by its insertion, never nested.
///
/// ```
/// use redline_text::{MarkupStyle, align, render, tokenize};
///
/// let baseline = tokenize("Hello brave world");
/// let revised = tokenize("Hello bold world");
/// let operations = align(&baseline, &revised);
///
/// assert_eq!(
///     render(&operations, &baseline, &revised, &MarkupStyle::plain()),
///     "Hello [-brave-]{+bold+} world"
/// );
/// ```
#[must_use]
pub fn render(
    operations: &[EditOperation],
    baseline: &[Token],
    revised: &[Token],
    style: &MarkupStyle,
) -> String {
    let capacity = baseline
        .iter()
        .chain(revised)
        .map(|token| token.text().len())
        .sum();
    let mut builder = MarkupBuilder::new(style, capacity);

    for operation in operations {
        match operation.tag {
            Tag::Equal => builder.retain(&operation.baseline_text(baseline)),
            Tag::Delete => builder.delete(&operation.baseline_text(baseline)),
            Tag::Insert => builder.insert(&operation.revised_text(revised)),
            Tag::Replace => {
                builder.delete(&operation.baseline_text(baseline));
                builder.insert(&operation.revised_text(revised));
            }
        }
    }

    builder.take()
}
