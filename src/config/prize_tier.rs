//! Prize tier configuration structures

use serde::{Deserialize, Serialize};

/// A configured prize slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeTier {
    /// Rank or rank range this tier awards, e.g. "1st" or "2nd-3rd"
    pub place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PrizeTier {
    pub fn new(place: impl Into<String>) -> Self {
        Self {
            place: place.into(),
            amount: None,
            currency: None,
            description: None,
        }
    }
}

/// Number of prize-bearing ranks: one per configured tier
#[inline]
pub fn max_rank_for(tiers: &[PrizeTier]) -> u32 {
    u32::try_from(tiers.len()).unwrap_or(u32::MAX)
}
