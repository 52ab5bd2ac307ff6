//! Boundless Rewards Core - rank assignment and prize tier reconciliation
//!
//! This crate keeps hackathon submission ranks unique, persists them through
//! a pluggable ranking API with optimistic rollback, and validates winners
//! against the configured prize tiers.
//!
//! # Example
//! ```no_run
//! use boundless_rewards_core::{
//!     max_rank_for, validate, HackathonContext, PrizeTier, RankReconciler, RankingApi,
//!     Submission, SubmissionBoard,
//! };
//!
//! async fn pick_winner(api: impl RankingApi) {
//!     let tiers = vec![PrizeTier::new("1st"), PrizeTier::new("2nd")];
//!     let board = SubmissionBoard::new(vec![Submission::new("a"), Submission::new("b")]);
//!     let reconciler = RankReconciler::new(api, HackathonContext::new("org", "hack"));
//!
//!     reconciler
//!         .assign_rank(&board, "a", Some(1), max_rank_for(&tiers))
//!         .await;
//!     assert!(validate(&board.winners(), &tiers).valid);
//! }
//! ```

pub mod config;
pub mod error;
pub mod place;
pub mod ranking;
pub mod submission;
pub mod validation;

pub use crate::config::{
    max_rank_for, ConcurrencyMode, HackathonContext, PrizeTier, ReconcilerConfig,
};
pub use crate::error::{ApiError, Result, RewardsError};
pub use crate::place::{
    decode_place_span, extract_rank_from_position, OrdinalPlaceDecoder, PlaceDecoder,
};
pub use crate::ranking::{
    AssignOutcome, AssignRanksRequest, AssignRanksResponse, Notifier, RankEntry,
    RankReconciler, RankingApi, RecordingNotifier, TracingNotifier,
};
pub use crate::submission::{Submission, SubmissionBoard, SubmissionList};
pub use crate::validation::{validate, PrizeTierValidator, TierValidation};
