/// A run of `len` tokens that are identical in both sequences, starting at
/// `baseline_start` in the baseline and at `revised_start` in the revised
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub baseline_start: usize,
    pub revised_start: usize,
    pub len: usize,
}

impl MatchingBlock {
    pub fn new(baseline_start: usize, revised_start: usize, len: usize) -> Self {
        MatchingBlock {
            baseline_start,
            revised_start,
            len,
        }
    }

    pub fn baseline_end(&self) -> usize { self.baseline_start + self.len }

    pub fn revised_end(&self) -> usize { self.revised_start + self.len }

    /// Whether `next` continues this block on both sides without a gap.
    pub fn is_followed_by(&self, next: &MatchingBlock) -> bool {
        self.baseline_end() == next.baseline_start && self.revised_end() == next.revised_start
    }
}

/// Merges neighbouring blocks that continue each other and drops empty ones.
/// The input must be sorted.
pub fn collapse_adjacent(blocks: impl IntoIterator<Item = MatchingBlock>) -> Vec<MatchingBlock> {
    let mut result: Vec<MatchingBlock> = Vec::new();

    for block in blocks.into_iter().filter(|block| block.len > 0) {
        match result.last_mut() {
            Some(last) if last.is_followed_by(&block) => last.len += block.len,
            _ => result.push(block),
        }
    }

    result
}
