//! RankReconciler - optimistic rank assignment with remote persistence

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::{ConcurrencyMode, HackathonContext, ReconcilerConfig};
use crate::error::RewardsError;
use crate::ranking::{
    check_rank_request, plan_rank_assignment, AssignRanksRequest, Notifier, OptimisticUpdate,
    RankEntry, RankingApi, TracingNotifier,
};
use crate::submission::SubmissionList;

/// What happened to one `assign_rank` call
#[derive(Debug, Clone, PartialEq)]
pub enum AssignOutcome {
    /// The backend accepted the ranks; the optimistic state was kept
    Applied { payload: Vec<RankEntry> },
    /// The backend refused or the call failed; the list was restored
    RolledBack { message: String },
    /// The request was invalid; nothing was changed or sent
    Rejected { reason: RewardsError },
}

impl AssignOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, AssignOutcome::Applied { .. })
    }
}

/// Counts a call as in flight until dropped
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Keeps submission ranks unique and in sync with the ranking API
///
/// Every call snapshots the caller's list, swaps in the new ranks at once,
/// and either keeps them or swaps the snapshot back. Failures are reported
/// through the [`Notifier`] and the returned [`AssignOutcome`], never as `Err`.
pub struct RankReconciler<A, N = TracingNotifier> {
    api: A,
    notifier: N,
    context: HackathonContext,
    config: ReconcilerConfig,
    in_flight: AtomicUsize,
    gate: Mutex<()>,
}

impl<A: RankingApi> RankReconciler<A, TracingNotifier> {
    pub fn new(api: A, context: HackathonContext) -> Self {
        Self::with_notifier(api, TracingNotifier, context)
    }
}

impl<A: RankingApi, N: Notifier> RankReconciler<A, N> {
    pub fn with_notifier(api: A, notifier: N, context: HackathonContext) -> Self {
        Self {
            api,
            notifier,
            context,
            config: ReconcilerConfig::default(),
            in_flight: AtomicUsize::new(0),
            gate: Mutex::new(()),
        }
    }

    pub fn with_config(mut self, config: ReconcilerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn context(&self) -> &HackathonContext {
        &self.context
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// True while any `assign_rank` call has not settled
    pub fn is_assigning_ranks(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Assign `new_rank` to one submission, or clear it with `None`/`Some(0)`
    ///
    /// Any other submission holding the same rank (within `max_rank`) loses it.
    pub async fn assign_rank<L>(
        &self,
        list: &L,
        submission_id: &str,
        new_rank: Option<u32>,
        max_rank: u32,
    ) -> AssignOutcome
    where
        L: SubmissionList + ?Sized,
    {
        let _flight = InFlight::enter(&self.in_flight);
        let _serial = match self.config.concurrency {
            ConcurrencyMode::SingleFlight => Some(self.gate.lock().await),
            ConcurrencyMode::Unguarded => None,
        };

        let update = OptimisticUpdate::begin(list);

        if let Err(reason) = check_rank_request(update.snapshot(), submission_id, new_rank, max_rank)
        {
            warn!(
                hackathon_id = %self.context.hackathon_id,
                submission_id,
                error = %reason,
                "rank request rejected"
            );
            update.commit();
            self.notifier.error(&reason.to_string());
            return AssignOutcome::Rejected { reason };
        }

        let plan = plan_rank_assignment(update.snapshot(), submission_id, new_rank, max_rank);
        debug!(
            hackathon_id = %self.context.hackathon_id,
            submission_id,
            ?new_rank,
            max_rank,
            ranked = plan.payload.len(),
            "applying optimistic rank change"
        );
        update.apply(plan.submissions);

        let request = AssignRanksRequest {
            ranks: plan.payload.clone(),
        };

        match self.api.assign_ranks(&self.context, request).await {
            Ok(response) if response.success => {
                update.commit();
                info!(
                    hackathon_id = %self.context.hackathon_id,
                    submission_id,
                    ranked = plan.payload.len(),
                    "ranks assigned"
                );
                let message = response
                    .explicit_message()
                    .unwrap_or(&self.config.success_message);
                self.notifier.success(message);
                AssignOutcome::Applied {
                    payload: plan.payload,
                }
            }
            Ok(response) => {
                let message = response
                    .explicit_message()
                    .unwrap_or(&self.config.failure_message)
                    .to_string();
                self.roll_back(update, submission_id, message)
            }
            Err(err) => {
                let message = err
                    .message()
                    .unwrap_or(&self.config.failure_message)
                    .to_string();
                self.roll_back(update, submission_id, message)
            }
        }
    }

    /// Shorthand for clearing a submission's rank
    pub async fn clear_rank<L>(&self, list: &L, submission_id: &str, max_rank: u32) -> AssignOutcome
    where
        L: SubmissionList + ?Sized,
    {
        self.assign_rank(list, submission_id, None, max_rank).await
    }

    fn roll_back<L>(
        &self,
        update: OptimisticUpdate<'_, L>,
        submission_id: &str,
        message: String,
    ) -> AssignOutcome
    where
        L: SubmissionList + ?Sized,
    {
        update.rollback();
        warn!(
            hackathon_id = %self.context.hackathon_id,
            submission_id,
            error = %message,
            "rank assignment failed, rolled back"
        );
        self.notifier.error(&message);
        AssignOutcome::RolledBack { message }
    }
}
