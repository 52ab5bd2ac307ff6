//! Optimistic update with rollback

use crate::submission::{Submission, SubmissionList};

/// Snapshot → apply → commit or rollback over a [`SubmissionList`]
///
/// Dropping an update that was neither committed nor rolled back restores
/// the snapshot, so a cancelled operation leaves no partial state behind.
pub struct OptimisticUpdate<'a, L: SubmissionList + ?Sized> {
    list: &'a L,
    snapshot: Option<Vec<Submission>>,
}

impl<'a, L: SubmissionList + ?Sized> OptimisticUpdate<'a, L> {
    pub fn begin(list: &'a L) -> Self {
        Self {
            snapshot: Some(list.snapshot()),
            list,
        }
    }

    /// The pre-operation state
    pub fn snapshot(&self) -> &[Submission] {
        self.snapshot.as_deref().unwrap_or_default()
    }

    /// Swap the optimistic state in
    pub fn apply(&self, submissions: Vec<Submission>) {
        self.list.replace(submissions);
    }

    /// Keep whatever the list currently holds
    pub fn commit(mut self) {
        self.snapshot = None;
    }

    /// Restore the pre-operation state
    pub fn rollback(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.list.replace(snapshot);
        }
    }
}

impl<L: SubmissionList + ?Sized> Drop for OptimisticUpdate<'_, L> {
    fn drop(&mut self) {
        self.restore();
    }
}
