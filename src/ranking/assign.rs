//! Pure rank change computation

use serde::{Deserialize, Serialize};

use crate::error::{Result, RewardsError};
use crate::submission::Submission;

/// One `{participantId, rank}` pair sent to the ranking API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub participant_id: String,
    pub rank: u32,
}

/// Local state and remote payload for one rank change
#[derive(Debug, Clone, PartialEq)]
pub struct RankPlan {
    pub submissions: Vec<Submission>,
    pub payload: Vec<RankEntry>,
}

/// Zero clears a rank, same as `None`
#[inline]
pub fn normalize_rank(new_rank: Option<u32>) -> Option<u32> {
    new_rank.filter(|rank| *rank > 0)
}

/// Apply a rank change to a snapshot
///
/// The target gets `new_rank` (or is cleared). Any other submission holding
/// exactly `new_rank` is cleared when `new_rank <= max_rank`. Everything else
/// is copied unchanged.
pub fn apply_rank_change(
    submissions: &[Submission],
    submission_id: &str,
    new_rank: Option<u32>,
    max_rank: u32,
) -> Vec<Submission> {
    let new_rank = normalize_rank(new_rank);
    let evicted = new_rank.filter(|rank| *rank <= max_rank);

    submissions
        .iter()
        .map(|submission| {
            if submission.id == submission_id {
                Submission {
                    rank: new_rank,
                    ..submission.clone()
                }
            } else if evicted.is_some() && submission.rank == evicted {
                Submission {
                    rank: None,
                    ..submission.clone()
                }
            } else {
                submission.clone()
            }
        })
        .collect()
}

/// Ranked submissions as API entries; unranked ones are omitted
pub fn build_rank_payload(submissions: &[Submission]) -> Vec<RankEntry> {
    submissions
        .iter()
        .filter_map(|submission| {
            submission.rank.map(|rank| RankEntry {
                participant_id: submission.ranking_id().to_string(),
                rank,
            })
        })
        .collect()
}

/// Compute the optimistic local state and the remote payload
///
/// Both sides are derived from the same snapshot so they cannot drift.
pub fn plan_rank_assignment(
    snapshot: &[Submission],
    submission_id: &str,
    new_rank: Option<u32>,
    max_rank: u32,
) -> RankPlan {
    let submissions = apply_rank_change(snapshot, submission_id, new_rank, max_rank);
    let payload = build_rank_payload(&apply_rank_change(
        snapshot,
        submission_id,
        new_rank,
        max_rank,
    ));
    RankPlan {
        submissions,
        payload,
    }
}

/// Reject a request that names an unknown submission or a rank outside `1..=max_rank`
pub fn check_rank_request(
    snapshot: &[Submission],
    submission_id: &str,
    new_rank: Option<u32>,
    max_rank: u32,
) -> Result<()> {
    if !snapshot.iter().any(|s| s.id == submission_id) {
        return Err(RewardsError::SubmissionNotFound(submission_id.to_string()));
    }

    if let Some(rank) = normalize_rank(new_rank) {
        if rank > max_rank {
            return Err(RewardsError::RankOutOfRange { rank, max_rank });
        }
    }

    Ok(())
}
