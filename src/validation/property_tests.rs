//! Property tests for validation module
//!
//! Feature: hackathon-rewards
//! Property 3: Prize Tier Validation Determinism

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::config::PrizeTier;
use crate::submission::Submission;
use crate::validation::validate;

fn tier_ranks_strategy() -> impl Strategy<Value = BTreeSet<u32>> {
    prop::collection::btree_set(1..=20u32, 0..=10)
}

fn winner_ranks_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1..=20u32, 0..=12)
}

fn build(winner_ranks: &[u32], tier_ranks: &BTreeSet<u32>) -> (Vec<Submission>, Vec<PrizeTier>) {
    let winners = winner_ranks
        .iter()
        .enumerate()
        .map(|(i, rank)| Submission::new(format!("w{}", i)).with_rank(*rank))
        .collect();
    let tiers = tier_ranks
        .iter()
        .map(|rank| PrizeTier::new(format!("{}th place", rank)))
        .collect();
    (winners, tiers)
}

proptest! {
    /// Property 3.1: missing ranks are exactly the winner ranks with no tier
    #[test]
    fn prop_missing_ranks_exact(
        winner_ranks in winner_ranks_strategy(),
        tier_ranks in tier_ranks_strategy()
    ) {
        let (winners, tiers) = build(&winner_ranks, &tier_ranks);
        let result = validate(&winners, &tiers);

        let expected: Vec<u32> = winner_ranks
            .iter()
            .copied()
            .filter(|r| !tier_ranks.contains(r))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        prop_assert_eq!(&result.missing_ranks, &expected);
        prop_assert_eq!(result.valid, expected.is_empty());
    }

    /// Property 3.2: winner order does not change the result
    #[test]
    fn prop_order_independent(
        winner_ranks in winner_ranks_strategy(),
        tier_ranks in tier_ranks_strategy()
    ) {
        let (winners, tiers) = build(&winner_ranks, &tier_ranks);
        let mut reversed = winners.clone();
        reversed.reverse();

        prop_assert_eq!(validate(&winners, &tiers), validate(&reversed, &tiers));
    }
}
