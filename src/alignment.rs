mod budget;
mod edit_operation;
mod longest_match;
mod matching_block;
mod myers;

use budget::Budget;
pub use edit_operation::{EditOperation, Tag};
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{errors::RedlineError, tokenizer::token::Token};

/// The algorithm used to align two token sequences.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Recursively match the longest common block first, preferring the
    /// earliest one on ties. Produces phrase-level changes.
    #[default]
    LongestMatch,
    /// Myers' algorithm, minimising the number of changed tokens. Faster on
    /// large, mostly unchanged documents.
    Myers,
}

/// Aligns `baseline` with `revised` using the longest-matching-block
/// algorithm.
///
/// ```
/// use redline_text::{EditOperation, Tag, align, tokenize};
///
/// let operations = align(&tokenize("Hello world"), &tokenize("Hello brave world"));
/// assert_eq!(
///     operations,
///     vec![
///         EditOperation::new(Tag::Equal, 0..2, 0..2),
///         EditOperation::new(Tag::Insert, 2..2, 2..4),
///         EditOperation::new(Tag::Equal, 2..3, 4..5),
///     ]
/// );
/// ```
#[must_use]
pub fn align(baseline: &[Token], revised: &[Token]) -> Vec<EditOperation> {
    align_with(baseline, revised, Algorithm::LongestMatch)
}

/// Aligns `baseline` with `revised` using `algorithm`, however long it takes.
#[must_use]
pub fn align_with(
    baseline: &[Token],
    revised: &[Token],
    algorithm: Algorithm,
) -> Vec<EditOperation> {
    try_align_with(baseline, revised, algorithm, None)
        .expect("an unlimited budget is never exhausted")
}

/// Aligns `baseline` with `revised` using `algorithm`, giving up after
/// `max_comparisons` token comparisons.
///
/// # Errors
///
/// Returns `RedlineError::AlignmentTooExpensive` once the alignment has made
/// more than `max_comparisons` comparisons. `None` never fails.
pub fn try_align_with(
    baseline: &[Token],
    revised: &[Token],
    algorithm: Algorithm,
    max_comparisons: Option<usize>,
) -> Result<Vec<EditOperation>, RedlineError> {
    let mut budget = Budget::new(max_comparisons);
    let blocks = match algorithm {
        Algorithm::LongestMatch => {
            longest_match::longest_match_blocks(baseline, revised, &mut budget)?
        }
        Algorithm::Myers => myers::myers_blocks(baseline, revised, &mut budget)?,
    };

    let operations =
        EditOperation::vec_from_matching_blocks(&blocks, baseline.len(), revised.len());
    debug!(
        "Aligned {} baseline and {} revised tokens with {algorithm:?} into {} operations \
         after {} comparisons",
        baseline.len(),
        revised.len(),
        operations.len(),
        budget.spent()
    );

    Ok(operations)
}
