//! Winner-to-prize-tier validation

use ahash::AHashSet;
use serde::Serialize;
use smallvec::SmallVec;

use crate::config::PrizeTier;
use crate::place::{OrdinalPlaceDecoder, PlaceDecoder};
use crate::submission::Submission;

/// Result of checking winners against prize tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierValidation {
    pub valid: bool,
    /// Winner ranks with no matching tier, ascending and deduplicated
    pub missing_ranks: Vec<u32>,
}

/// Checks that every ranked winner maps to a configured prize tier
#[derive(Debug, Clone, Default)]
pub struct PrizeTierValidator<D = OrdinalPlaceDecoder> {
    decoder: D,
}

impl PrizeTierValidator<OrdinalPlaceDecoder> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: PlaceDecoder> PrizeTierValidator<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    pub fn validate(&self, winners: &[Submission], tiers: &[PrizeTier]) -> TierValidation {
        validate_with(winners, tiers, &self.decoder)
    }
}

/// Validate with the default ordinal place decoder
pub fn validate(winners: &[Submission], tiers: &[PrizeTier]) -> TierValidation {
    validate_with(winners, tiers, &OrdinalPlaceDecoder)
}

/// Validate with a caller-supplied place decoder
///
/// Tiers whose place does not decode match no rank. Unranked winners are
/// ignored.
pub fn validate_with<D: PlaceDecoder + ?Sized>(
    winners: &[Submission],
    tiers: &[PrizeTier],
    decoder: &D,
) -> TierValidation {
    let tier_ranks: AHashSet<u32> = tiers
        .iter()
        .filter_map(|tier| decoder.decode(&tier.place))
        .collect();

    let mut missing: SmallVec<[u32; 8]> = winners
        .iter()
        .filter_map(|winner| winner.rank)
        .filter(|rank| !tier_ranks.contains(rank))
        .collect();
    missing.sort_unstable();
    missing.dedup();

    TierValidation {
        valid: missing.is_empty(),
        missing_ranks: missing.into_vec(),
    }
}
