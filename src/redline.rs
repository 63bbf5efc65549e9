use log::{debug, warn};

use crate::{
    alignment::{align, try_align_with},
    config::RedlineConfig,
    errors::RedlineError,
    render::render,
};

/// Compares `baseline` with `revised` word by word and returns `baseline`
/// with the changes marked up inline in the default HTML style.
///
/// Unchanged text, including all whitespace and line breaks, is copied
/// verbatim. Deleted spans are wrapped in red `<del>` and inserted spans in
/// green `<add>` elements; a replaced span is its deletion immediately
/// followed by its insertion.
///
/// ```
/// use redline_text::redline;
///
/// assert_eq!(
///     redline("Hello world", "Hello brave world"),
///     r#"Hello <span style="color:#008000"><add>brave </add></span>world"#
/// );
/// ```
///
/// No size or work limit applies, so large repetitive inputs can take a long
/// time. Use `redline_with_config` to bound it.
#[must_use]
pub fn redline(baseline: &str, revised: &str) -> String {
    let config = RedlineConfig::default();
    let tokenizer = &*config.tokenizer;
    let baseline = tokenizer(baseline);
    let revised = tokenizer(revised);

    render(&align(&baseline, &revised), &baseline, &revised, &config.markup)
}

/// Like `redline` but with a custom tokenizer, alignment algorithm, markup
/// style and size limit.
///
/// ```
/// use redline_text::{MarkupStyle, RedlineConfig, redline_with_config};
///
/// let config = RedlineConfig::default().with_markup(MarkupStyle::plain());
/// let markup = redline_with_config("Hello brave world", "Hello world", &config);
/// assert_eq!(markup.unwrap(), "Hello [-brave -]world");
/// ```
///
/// # Errors
///
/// Returns `RedlineError::InputTooLarge` if either text has more tokens than
/// `config.max_tokens`, and `RedlineError::AlignmentTooExpensive` if aligning
/// them needs more than `config.max_comparisons` token comparisons.
pub fn redline_with_config(
    baseline: &str,
    revised: &str,
    config: &RedlineConfig,
) -> Result<String, RedlineError> {
    let tokenizer = &*config.tokenizer;
    let baseline_tokens = tokenizer(baseline);
    let revised_tokens = tokenizer(revised);

    if let Some(limit) = config.max_tokens {
        if baseline_tokens.len() > limit || revised_tokens.len() > limit {
            warn!(
                "Refusing to align {} baseline and {} revised tokens, the limit is {limit}",
                baseline_tokens.len(),
                revised_tokens.len()
            );
            return Err(RedlineError::InputTooLarge {
                baseline_tokens: baseline_tokens.len(),
                revised_tokens: revised_tokens.len(),
                limit,
            });
        }
    }

    debug!(
        "Tokenized {} baseline and {} revised tokens with the {:?} tokenizer",
        baseline_tokens.len(),
        revised_tokens.len(),
        config.tokenizer
    );

    let operations = try_align_with(
        &baseline_tokens,
        &revised_tokens,
        config.algorithm,
        config.max_comparisons,
    )
    .inspect_err(|error| warn!("Gave up aligning with {:?}: {error}", config.algorithm))?;

    Ok(render(
        &operations,
        &baseline_tokens,
        &revised_tokens,
        &config.markup,
    ))
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{
        Algorithm, BuiltinTokenizer, DEFAULT_MAX_COMPARISONS, MarkupStyle, accept_all, reject_all,
    };

    fn plain(baseline: &str, revised: &str) -> String {
        let config = RedlineConfig::default().with_markup(MarkupStyle::plain());
        redline_with_config(baseline, revised, &config).unwrap()
    }

    #[test]
    fn test_substitution() {
        assert_eq!(
            plain(
                "This is a text\nThis is a text on a new line",
                "This is a short text\nThis is gibberish on a new line"
            ),
            "This is a{+ short+} text\nThis is [-a text-]{+gibberish+} on a new line"
        );
    }

    #[test]
    fn test_insertion_and_deletion() {
        assert_snapshot!(plain("Hello world", "Hello brave world"), @"Hello {+brave +}world");
        assert_snapshot!(plain("Hello brave world", "Hello world"), @"Hello [-brave -]world");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(
            redline("text", ""),
            r#"<span style="color:#c00000"><del>text</del></span>"#
        );
        assert_eq!(
            redline("", "text"),
            r#"<span style="color:#008000"><add>text</add></span>"#
        );
        assert_eq!(redline("", ""), "");
    }

    #[test_case("Tabs\tand  double  spaces\r\nand CRLF\n" ; "mixed whitespace")]
    #[test_case("## Experience\n\n- Built **things**\n- Led _teams_" ; "markdown")]
    #[test_case("" ; "empty")]
    fn test_equal_inputs_are_unchanged(text: &str) {
        assert_eq!(redline(text, text), text);
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let baseline = "Senior\tengineer,  five years\r\nRust and\u{a0}Go";
        let revised = "Staff\tengineer,  seven years\r\nRust and\u{a0}Go";

        assert_eq!(
            plain(baseline, revised),
            "[-Senior-]{+Staff+}\tengineer,  [-five-]{+seven+} years\r\nRust and\u{a0}Go"
        );
    }

    #[test]
    fn test_size_limit() {
        let config = RedlineConfig::default().with_max_tokens(Some(3));

        assert_eq!(
            redline_with_config("a b c", "a b", &config),
            Err(RedlineError::InputTooLarge {
                baseline_tokens: 5,
                revised_tokens: 3,
                limit: 3
            })
        );
        assert!(redline_with_config("a b", "a", &config).is_ok());
    }

    #[test]
    fn test_repetitive_input_hits_comparison_limit() {
        let baseline: String = (0..2_000).map(|i| format!("w{} ", i % 97)).collect();
        let revised: String = (0..2_000).map(|i| format!("w{} ", (i * 7) % 89)).collect();

        assert_eq!(
            redline_with_config(&baseline, &revised, &RedlineConfig::default()),
            Err(RedlineError::AlignmentTooExpensive {
                limit: DEFAULT_MAX_COMPARISONS
            })
        );
    }

    #[test_case(Algorithm::LongestMatch ; "longest match")]
    #[test_case(Algorithm::Myers ; "myers")]
    fn test_comparison_limit(algorithm: Algorithm) {
        let config = RedlineConfig::default()
            .with_algorithm(algorithm)
            .with_max_comparisons(Some(5));

        assert_eq!(
            redline_with_config("a b c d", "d c b a", &config),
            Err(RedlineError::AlignmentTooExpensive { limit: 5 })
        );
        assert!(
            redline_with_config("a b c d", "d c b a", &config.with_max_comparisons(None)).is_ok()
        );
    }

    #[test]
    fn test_line_tokenizer() {
        let config = RedlineConfig::default()
            .with_tokenizer(BuiltinTokenizer::Line)
            .with_markup(MarkupStyle::plain());

        assert_eq!(
            redline_with_config("one\ntwo\nthree", "one\n2\nthree", &config).unwrap(),
            "one\n[-two-]{+2+}\nthree"
        );
    }

    #[test_case(Algorithm::LongestMatch ; "longest match")]
    #[test_case(Algorithm::Myers ; "myers")]
    fn test_round_trip(algorithm: Algorithm) {
        let baseline = "Led a team of 5 engineers.\n\nShipped the v2 API, on time.";
        let revised = "Led a cross-functional team of 8 engineers!\nShipped the API on time.";
        let config = RedlineConfig::default().with_algorithm(algorithm);

        let markup = redline_with_config(baseline, revised, &config).unwrap();

        assert_eq!(reject_all(&markup, &MarkupStyle::html()).unwrap(), baseline);
        assert_eq!(accept_all(&markup, &MarkupStyle::html()).unwrap(), revised);
    }

    #[test_case("a [", "a ", "a [-[-]" ; "deleted bracket")]
    #[test_case("a ", "a {", "a {+{+}" ; "inserted brace")]
    #[test_case("x-", "x+", "x[---]{+++}" ; "closer characters")]
    fn test_plain_markup_reads_back(baseline: &str, revised: &str, expected: &str) {
        let markup = plain(baseline, revised);

        assert_eq!(markup, expected);
        assert_eq!(reject_all(&markup, &MarkupStyle::plain()).unwrap(), baseline);
        assert_eq!(accept_all(&markup, &MarkupStyle::plain()).unwrap(), revised);
    }

    #[test]
    fn test_delimiters_in_input_are_not_escaped() {
        // Text that already contains a delimiter is passed through untouched,
        // which makes the markup ambiguous to read back.
        let baseline = "keep -] this";
        let markup = plain(baseline, "keep -] that");

        assert_eq!(markup, "keep -] [-this-]{+that+}");
        assert_eq!(
            reject_all(&markup, &MarkupStyle::plain()),
            Err(RedlineError::UnexpectedClose { position: 5 })
        );
    }
}
