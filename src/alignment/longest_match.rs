//! Longest-matching-block alignment.
//!
//! The longest run of tokens common to both sequences is matched first, then
//! the same is done recursively to the pieces left of and right of it. When
//! several runs are equally long, the one ending earliest in the baseline
//! (and then in the revised sequence) wins, so matches are made as early as
//! possible.
//!
//! * time: every block found costs a scan of its whole sub-problem, which is
//!   `O(NM)` when the sequences share many tokens. This gives `O(NMB)` in the
//!   worst case for `B` matched blocks, near `O(N)` for typical prose edits
//! * space: `O(N + M)`
//!
//! Unlike some implementations of this algorithm, no token is ever treated as
//! junk, however frequently it occurs. Repetitive inputs are therefore the
//! slow case, which is what the comparison [`Budget`] bounds.

use std::{collections::HashMap, mem, ops::Range};

use log::trace;

use super::{
    budget::Budget,
    matching_block::{MatchingBlock, collapse_adjacent},
};
use crate::{errors::RedlineError, tokenizer::token::Token};

/// Returns the sorted, collapsed matching blocks between `old` and `new`.
///
/// Every candidate pair of equal tokens visited is charged to `budget`.
pub fn longest_match_blocks(
    old: &[Token],
    new: &[Token],
    budget: &mut Budget,
) -> Result<Vec<MatchingBlock>, RedlineError> {
    let positions = positions_by_text(new);

    let mut blocks = Vec::new();
    let mut queue = vec![(0..old.len(), 0..new.len())];

    while let Some((old_range, new_range)) = queue.pop() {
        let Some(block) =
            find_longest_match(old, old_range.clone(), &positions, new_range.clone(), budget)?
        else {
            continue;
        };
        trace!("Matched {block:?} within {old_range:?} and {new_range:?}");

        if old_range.start < block.baseline_start && new_range.start < block.revised_start {
            queue.push((
                old_range.start..block.baseline_start,
                new_range.start..block.revised_start,
            ));
        }

        if block.baseline_end() < old_range.end && block.revised_end() < new_range.end {
            queue.push((
                block.baseline_end()..old_range.end,
                block.revised_end()..new_range.end,
            ));
        }

        blocks.push(block);
    }

    blocks.sort_unstable_by_key(|block| (block.baseline_start, block.revised_start));
    Ok(collapse_adjacent(blocks))
}

/// Maps each distinct token text to the ascending list of its indices.
fn positions_by_text(tokens: &[Token]) -> HashMap<&str, Vec<usize>> {
    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, token) in tokens.iter().enumerate() {
        positions.entry(token.text()).or_default().push(i);
    }

    positions
}

/// Finds the longest block of `old[old_range]` that also appears in
/// `new[new_range]`, where `new` is given by its `positions`.
fn find_longest_match(
    old: &[Token],
    old_range: Range<usize>,
    positions: &HashMap<&str, Vec<usize>>,
    new_range: Range<usize>,
    budget: &mut Budget,
) -> Result<Option<MatchingBlock>, RedlineError> {
    let mut best = MatchingBlock::new(old_range.start, new_range.start, 0);

    // Length of the match ending at `old[i - 1]` and `new[j]`, keyed by `j`
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    let mut next_run_lengths: HashMap<usize, usize> = HashMap::new();

    for i in old_range {
        next_run_lengths.clear();

        let candidates = positions.get(old[i].text()).map_or(&[][..], |indices| {
            let first = indices.partition_point(|&j| j < new_range.start);
            let last = indices.partition_point(|&j| j < new_range.end);
            &indices[first..last]
        });
        budget.spend(candidates.len() + 1)?;

        for &j in candidates {
            let length = j
                .checked_sub(1)
                .and_then(|previous| run_lengths.get(&previous))
                .copied()
                .unwrap_or(0)
                + 1;
            next_run_lengths.insert(j, length);

            if length > best.len {
                best = MatchingBlock::new(i + 1 - length, j + 1 - length, length);
            }
        }

        mem::swap(&mut run_lengths, &mut next_run_lengths);
    }

    Ok((best.len > 0).then_some(best))
}
