use thiserror::Error;

/// Error type of the fallible operations of this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RedlineError {
    /// One of the inputs has more tokens than the configured limit allows
    #[error(
        "Input too large to align: {baseline_tokens} baseline and {revised_tokens} revised \
         tokens, but at most {limit} tokens are allowed per side"
    )]
    InputTooLarge {
        baseline_tokens: usize,
        revised_tokens: usize,
        limit: usize,
    },

    /// Aligning the inputs would take more token comparisons than the
    /// configured limit allows
    #[error("Input too expensive to align: more than {limit} token comparisons needed")]
    AlignmentTooExpensive { limit: usize },

    /// A span was opened but never closed
    #[error("Unterminated marker opened at byte {position}")]
    UnterminatedMarker { position: usize },

    /// A closing delimiter was found without a matching opening one
    #[error("Unexpected closing marker at byte {position}")]
    UnexpectedClose { position: usize },

    /// A span was opened inside another span
    #[error("Nested marker at byte {position}")]
    NestedMarker { position: usize },

    /// The markup style can't be read back because a delimiter is empty
    #[error("Markup delimiters must not be empty")]
    EmptyDelimiter,

    /// The configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
