use std::{iter, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::matching_block::MatchingBlock;
use crate::tokenizer::token::{Token, join};

/// The kind of change an `EditOperation` describes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Equal,
    Delete,
    Insert,
    Replace,
}

/// One contiguous unit of an alignment: `baseline[baseline]` became
/// `revised[revised]`.
///
/// The operations returned by `align` partition both token sequences in
/// ascending order without gaps.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation {
    pub tag: Tag,
    pub baseline: Range<usize>,
    pub revised: Range<usize>,
}

impl EditOperation {
    #[must_use]
    pub fn new(tag: Tag, baseline: Range<usize>, revised: Range<usize>) -> Self {
        EditOperation {
            tag,
            baseline,
            revised,
        }
    }

    /// Derives the operations from sorted, non-overlapping matching blocks:
    /// every gap between two blocks is a deletion, an insertion, or a
    /// replacement when both sides have tokens in the gap.
    pub(crate) fn vec_from_matching_blocks(
        blocks: &[MatchingBlock],
        baseline_len: usize,
        revised_len: usize,
    ) -> Vec<Self> {
        let sentinel = MatchingBlock::new(baseline_len, revised_len, 0);
        let mut result = Vec::with_capacity(blocks.len() * 2 + 1);
        let (mut i, mut j) = (0, 0);

        for block in blocks.iter().chain(iter::once(&sentinel)) {
            let tag = match (i < block.baseline_start, j < block.revised_start) {
                (true, true) => Some(Tag::Replace),
                (true, false) => Some(Tag::Delete),
                (false, true) => Some(Tag::Insert),
                (false, false) => None,
            };

            if let Some(tag) = tag {
                result.push(EditOperation::new(
                    tag,
                    i..block.baseline_start,
                    j..block.revised_start,
                ));
            }

            if block.len > 0 {
                result.push(EditOperation::new(
                    Tag::Equal,
                    block.baseline_start..block.baseline_end(),
                    block.revised_start..block.revised_end(),
                ));
            }

            (i, j) = (block.baseline_end(), block.revised_end());
        }

        result
    }

    /// The text of the baseline side of the operation. Ranges beyond the end
    /// of `baseline` yield an empty string.
    #[must_use]
    pub fn baseline_text(&self, baseline: &[Token]) -> String {
        join(baseline.get(self.baseline.clone()).unwrap_or_default())
    }

    /// The text of the revised side of the operation. Ranges beyond the end
    /// of `revised` yield an empty string.
    #[must_use]
    pub fn revised_text(&self, revised: &[Token]) -> String {
        join(revised.get(self.revised.clone()).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_no_blocks() {
        assert_eq!(EditOperation::vec_from_matching_blocks(&[], 0, 0), vec![]);
        assert_eq!(
            EditOperation::vec_from_matching_blocks(&[], 2, 0),
            vec![EditOperation::new(Tag::Delete, 0..2, 0..0)]
        );
        assert_eq!(
            EditOperation::vec_from_matching_blocks(&[], 0, 3),
            vec![EditOperation::new(Tag::Insert, 0..0, 0..3)]
        );
        assert_eq!(
            EditOperation::vec_from_matching_blocks(&[], 1, 1),
            vec![EditOperation::new(Tag::Replace, 0..1, 0..1)]
        );
    }

    #[test]
    fn test_gaps_between_blocks() {
        let blocks = [MatchingBlock::new(0, 0, 2), MatchingBlock::new(3, 2, 1)];

        assert_eq!(
            EditOperation::vec_from_matching_blocks(&blocks, 6, 5),
            vec![
                EditOperation::new(Tag::Equal, 0..2, 0..2),
                EditOperation::new(Tag::Delete, 2..3, 2..2),
                EditOperation::new(Tag::Equal, 3..4, 2..3),
                EditOperation::new(Tag::Replace, 4..6, 3..5),
            ]
        );
    }

    #[test]
    fn test_texts() {
        let baseline: Vec<Token> = vec!["a".into(), " ".into(), "b".into()];
        let operation = EditOperation::new(Tag::Delete, 1..3, 0..0);

        assert_eq!(operation.baseline_text(&baseline), " b");
        assert_eq!(operation.revised_text(&[]), "");
        assert_eq!(
            EditOperation::new(Tag::Delete, 2..9, 0..0).baseline_text(&baseline),
            ""
        );
    }
}
