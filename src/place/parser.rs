//! Place string parser

use crate::error::{Result, RewardsError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;

/// Matches either a number with an optional ordinal suffix, or an ordinal word
static RANK_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\d+)(?:st|nd|rd|th)?|\b(first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth)\b",
    )
    .expect("rank token pattern is valid")
});

const ORDINAL_WORDS: [&str; 10] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
];

const RANGE_SEPARATORS: [&str; 5] = ["-", "\u{2013}", "to", "through", "&"];

/// Inclusive span of ranks awarded by one prize tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceSpan {
    pub start: u32,
    pub end: u32,
}

impl PlaceSpan {
    pub fn single(rank: u32) -> Self {
        Self {
            start: rank,
            end: rank,
        }
    }

    /// The rank a tier is matched against (first rank of the span)
    #[inline]
    pub fn representative(&self) -> u32 {
        self.start
    }

    #[inline]
    pub fn contains(&self, rank: u32) -> bool {
        (self.start..=self.end).contains(&rank)
    }

    /// Number of ranks the span awards
    pub fn rank_count(&self) -> u32 {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    #[inline]
    pub fn to_range(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

/// Parse a place string into the span of ranks it covers
///
/// The first number (or ordinal word) is the start of the span. When it is
/// directly followed by a range separator and a second rank, that rank is
/// the end.
pub fn parse_place(place: &str) -> Result<PlaceSpan> {
    let place = place.trim();
    if place.is_empty() {
        return Err(RewardsError::InvalidPlace("Empty place".to_string()));
    }

    let mut tokens = RANK_TOKEN.captures_iter(place);

    let first = tokens
        .next()
        .ok_or_else(|| RewardsError::InvalidPlace(format!("No rank found in: {}", place)))?;
    let start = token_rank(&first, place)?;
    let first_end = first.get(0).map_or(0, |m| m.end());

    let end = match tokens.next() {
        Some(second) => {
            let second_start = second.get(0).map_or(first_end, |m| m.start());
            let between = place[first_end..second_start].trim();
            if RANGE_SEPARATORS
                .iter()
                .any(|sep| between.eq_ignore_ascii_case(sep))
            {
                token_rank(&second, place)?
            } else {
                start
            }
        }
        None => start,
    };

    if end < start {
        return Err(RewardsError::InvalidPlace(format!(
            "Descending range in: {}",
            place
        )));
    }

    Ok(PlaceSpan { start, end })
}

fn token_rank(token: &regex::Captures<'_>, place: &str) -> Result<u32> {
    let rank = if let Some(digits) = token.get(1) {
        digits
            .as_str()
            .parse::<u32>()
            .map_err(|_| RewardsError::InvalidPlace(format!("Rank too large in: {}", place)))?
    } else if let Some(word) = token.get(2) {
        let word = word.as_str().to_ascii_lowercase();
        ORDINAL_WORDS
            .iter()
            .position(|w| *w == word)
            .map(|i| i as u32 + 1)
            .ok_or_else(|| RewardsError::InvalidPlace(format!("Unknown ordinal in: {}", place)))?
    } else {
        return Err(RewardsError::InvalidPlace(format!(
            "No rank found in: {}",
            place
        )));
    };

    if rank == 0 {
        return Err(RewardsError::InvalidPlace(format!(
            "Rank must be positive in: {}",
            place
        )));
    }

    Ok(rank)
}

/// Decode a place string to its representative rank, or `None` if it has none
pub fn extract_rank_from_position(place: &str) -> Option<u32> {
    parse_place(place).ok().map(|span| span.representative())
}
