//! Local list state holder for submissions

use parking_lot::RwLock;
use std::sync::Arc;

use super::Submission;

/// Holder of the caller-owned submission collection
///
/// The reconciler only ever reads a full snapshot and writes a full
/// replacement; it never patches individual entries.
pub trait SubmissionList: Send + Sync {
    fn snapshot(&self) -> Vec<Submission>;
    fn replace(&self, submissions: Vec<Submission>);
}

/// Shared, clonable submission collection
#[derive(Debug, Clone, Default)]
pub struct SubmissionBoard {
    inner: Arc<RwLock<Vec<Submission>>>,
}

impl SubmissionBoard {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(submissions)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<Submission> {
        self.inner.read().iter().find(|s| s.id == id).cloned()
    }

    pub fn rank_of(&self, id: &str) -> Option<u32> {
        self.inner
            .read()
            .iter()
            .find(|s| s.id == id)
            .and_then(|s| s.rank)
    }

    /// Ranked submissions ordered by rank, ties broken by original position
    pub fn winners(&self) -> Vec<Submission> {
        let mut winners: Vec<Submission> = self
            .inner
            .read()
            .iter()
            .filter(|s| s.is_ranked())
            .cloned()
            .collect();
        // sort_by_key is stable
        winners.sort_by_key(|s| s.rank);
        winners
    }
}

impl SubmissionList for SubmissionBoard {
    fn snapshot(&self) -> Vec<Submission> {
        self.inner.read().clone()
    }

    fn replace(&self, submissions: Vec<Submission>) {
        *self.inner.write() = submissions;
    }
}

impl From<Vec<Submission>> for SubmissionBoard {
    fn from(submissions: Vec<Submission>) -> Self {
        Self::new(submissions)
    }
}
