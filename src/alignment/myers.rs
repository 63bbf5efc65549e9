//! Myers' diff algorithm, based on the implementation in
//! <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! Each diagonal visited and each token compared along a snake is charged to
//! the comparison [`Budget`].
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.
//!
//! The result has the minimal number of inserted and deleted tokens but,
//! unlike the longest-match alignment, may split a phrase to reuse a frequent
//! token such as a single space.

use std::ops::{Index, IndexMut, Range};

use super::{
    budget::Budget,
    matching_block::{MatchingBlock, collapse_adjacent},
};
use crate::{errors::RedlineError, tokenizer::token::Token};

/// Returns the sorted, collapsed matching blocks between `old` and `new`.
pub fn myers_blocks(
    old: &[Token],
    new: &[Token],
    budget: &mut Budget,
) -> Result<Vec<MatchingBlock>, RedlineError> {
    let max_d = (old.len() + new.len()).div_ceil(2) + 1;
    let mut vb = V::new(max_d);
    let mut vf = V::new(max_d);
    let mut result = Vec::new();

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut result,
        budget,
    )?;

    Ok(collapse_adjacent(result))
}

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, we only need to retain `x`
/// because `y` can be computed from `x - k`.
///
/// `k` can be negative, so `V` is a `Vec` plus an `offset` mapping `k` back
/// to a non-negative index.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: isize::try_from(max_d).unwrap_or(isize::MAX),
            v: vec![0; 2 * max_d],
        }
    }

    fn position(&self, k: isize) -> usize {
        let index = usize::try_from(k + self.offset).unwrap_or(usize::MAX);
        index.min(self.v.len().saturating_sub(1))
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, k: isize) -> &Self::Output { &self.v[self.position(k)] }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        let position = self.position(k);
        &mut self.v[position]
    }
}

fn to_isize(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

fn common_prefix_len(
    old: &[Token],
    old_range: Range<usize>,
    new: &[Token],
    new_range: Range<usize>,
) -> usize {
    old[old_range]
        .iter()
        .zip(&new[new_range])
        .take_while(|(a, b)| a == b)
        .count()
}

fn common_suffix_len(
    old: &[Token],
    old_range: Range<usize>,
    new: &[Token],
    new_range: Range<usize>,
) -> usize {
    old[old_range]
        .iter()
        .rev()
        .zip(new[new_range].iter().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Finds the start of the middle snake of an optimal path by running the
/// search forwards from the top-left and backwards from the bottom-right
/// corner until the two overlap.
fn find_middle_snake(
    old: &[Token],
    old_range: Range<usize>,
    new: &[Token],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    budget: &mut Budget,
) -> Result<Option<(usize, usize)>, RedlineError> {
    let n = old_range.len();
    let m = new_range.len();

    // The optimal edit script length is odd or even as `delta` is odd or even
    let delta = to_isize(n) - to_isize(m);
    let odd = delta & 1 == 1;

    vf[1] = 0;
    vb[1] = 0;

    let d_max = to_isize((n + m).div_ceil(2) + 1);
    for d in 0..d_max {
        // Forward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = usize::try_from(to_isize(x) - k).unwrap_or(0);
            let (x0, y0) = (x, y);

            let mut advance = 0;
            if x < n && y < m {
                advance = common_prefix_len(
                    old,
                    old_range.start + x..old_range.end,
                    new,
                    new_range.start + y..new_range.end,
                );
                x += advance;
            }
            budget.spend(advance + 1)?;

            vf[k] = x;

            if odd && (k - delta).abs() <= (d - 1) && vf[k] + vb[-(k - delta)] >= n {
                return Ok(Some((x0 + old_range.start, y0 + new_range.start)));
            }
        }

        // Backward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = usize::try_from(to_isize(x) - k).unwrap_or(0);

            let mut advance = 0;
            if x < n && y < m {
                advance = common_suffix_len(
                    old,
                    old_range.start..old_range.start + n - x,
                    new,
                    new_range.start..new_range.start + m - y,
                );
                x += advance;
                y += advance;
            }
            budget.spend(advance + 1)?;

            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Ok(Some((n - x + old_range.start, m - y + new_range.start)));
            }
        }
    }

    Ok(None)
}

fn conquer(
    old: &[Token],
    mut old_range: Range<usize>,
    new: &[Token],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    result: &mut Vec<MatchingBlock>,
    budget: &mut Budget,
) -> Result<(), RedlineError> {
    let prefix_len = common_prefix_len(old, old_range.clone(), new, new_range.clone());
    result.push(MatchingBlock::new(
        old_range.start,
        new_range.start,
        prefix_len,
    ));
    old_range.start += prefix_len;
    new_range.start += prefix_len;

    let suffix_len = common_suffix_len(old, old_range.clone(), new, new_range.clone());
    old_range.end -= suffix_len;
    new_range.end -= suffix_len;
    let suffix = MatchingBlock::new(old_range.end, new_range.end, suffix_len);
    budget.spend(prefix_len + suffix_len + 1)?;

    // Ranges left empty on either side are pure insertions or deletions,
    // which have no matching block.
    if !old_range.is_empty() && !new_range.is_empty() {
        if let Some((x_start, y_start)) =
            find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb, budget)?
        {
            conquer(
                old,
                old_range.start..x_start,
                new,
                new_range.start..y_start,
                vf,
                vb,
                result,
                budget,
            )?;
            conquer(
                old,
                x_start..old_range.end,
                new,
                y_start..new_range.end,
                vf,
                vb,
                result,
                budget,
            )?;
        }
    }

    result.push(suffix);
    Ok(())
}
