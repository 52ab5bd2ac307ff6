//! Configuration module for rewards data structures
//!
//! This module handles deserialization of prize tiers, submission snapshots
//! and reconciler settings from backend JSON payloads.

mod context;
mod prize_tier;
mod reconciler;

pub use context::*;
pub use prize_tier::*;
pub use reconciler::*;

use crate::error::{Result, RewardsError};
use crate::submission::Submission;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Look up the first key present in a JSON object
fn get_field<'a>(config: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| config.get(*name))
}

fn extract<T: DeserializeOwned>(value: &Value, what: &str) -> Result<T> {
    T::deserialize(value)
        .map_err(|e| RewardsError::DeserializationError(format!("{}: {}", what, e)))
}

/// Deserialize prize tiers from a config payload
/// Expected format: {"prizeTiers": [PrizeTier, ...]} (snake_case key also accepted)
pub fn deserialize_prize_tiers(config: &Value) -> Result<Vec<PrizeTier>> {
    let tiers = get_field(config, &["prizeTiers", "prize_tiers"]).ok_or_else(|| {
        RewardsError::DeserializationError("prizeTiers not found".to_string())
    })?;

    let tiers: Vec<PrizeTier> = extract(tiers, "prizeTiers")?;

    for tier in &tiers {
        if tier.place.trim().is_empty() {
            return Err(RewardsError::InvalidConfig(
                "prize tier with empty place".to_string(),
            ));
        }
    }

    Ok(tiers)
}

/// Deserialize a submission snapshot
/// Expected format: {"submissions": [Submission, ...]}
pub fn deserialize_submissions(config: &Value) -> Result<Vec<Submission>> {
    let submissions = get_field(config, &["submissions"]).ok_or_else(|| {
        RewardsError::DeserializationError("submissions not found".to_string())
    })?;

    let submissions: Vec<Submission> = extract(submissions, "submissions")?;

    let mut seen = ahash::AHashSet::with_capacity(submissions.len());
    for submission in &submissions {
        if !seen.insert(submission.id.as_str()) {
            return Err(RewardsError::InvalidConfig(format!(
                "duplicate submission id: {}",
                submission.id
            )));
        }
    }

    Ok(submissions)
}

/// Deserialize reconciler settings; a missing section yields the defaults
/// Expected format: {"reconciler": {...}}
pub fn deserialize_reconciler_config(config: &Value) -> Result<ReconcilerConfig> {
    match get_field(config, &["reconciler"]) {
        Some(Value::Null) | None => Ok(ReconcilerConfig::default()),
        Some(section) => extract(section, "reconciler"),
    }
}

/// Parse a JSON document and deserialize its reconciler section
pub fn load_reconciler_config(json: &str) -> Result<ReconcilerConfig> {
    let value: Value = serde_json::from_str(json)?;
    deserialize_reconciler_config(&value)
}
