use crate::errors::RedlineError;

/// Counts the token comparisons of one alignment and fails once more than
/// `limit` have been made. Without a limit, spending never fails.
#[derive(Debug, Clone)]
pub struct Budget {
    limit: Option<usize>,
    spent: usize,
}

impl Budget {
    pub const fn new(limit: Option<usize>) -> Self { Self { limit, spent: 0 } }

    pub const fn spent(&self) -> usize { self.spent }

    pub fn spend(&mut self, comparisons: usize) -> Result<(), RedlineError> {
        self.spent = self.spent.saturating_add(comparisons);

        match self.limit {
            Some(limit) if self.spent > limit => Err(RedlineError::AlignmentTooExpensive { limit }),
            Some(_) | None => Ok(()),
        }
    }
}
