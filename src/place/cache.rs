//! Place decoding cache

use crate::error::Result;
use crate::place::parser::{self, PlaceSpan};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::ops::RangeInclusive;

/// Global place cache, keyed by the trimmed place string
static PLACE_CACHE: Lazy<RwLock<AHashMap<String, PlaceSpan>>> = Lazy::new(|| {
    let map = AHashMap::with_capacity(64);
    RwLock::new(map)
});

/// Get or parse a place string, using cache for repeated places
#[inline]
pub fn get_or_decode(place: &str) -> Result<PlaceSpan> {
    let place = place.trim();
    {
        let cache = PLACE_CACHE.read();
        if let Some(span) = cache.get(place) {
            return Ok(*span);
        }
    }

    let span = parser::parse_place(place)?;

    {
        let mut cache = PLACE_CACHE.write();
        cache.insert(place.to_string(), span);
    }

    Ok(span)
}

/// Representative rank for a place string, using the cached span
#[inline]
pub fn decode_rank(place: &str) -> Option<u32> {
    get_or_decode(place).ok().map(|span| span.representative())
}

/// Inclusive range of ranks a place awards, or `None` if it does not decode
#[inline]
pub fn decode_place_span(place: &str) -> Option<RangeInclusive<u32>> {
    get_or_decode(place).ok().map(|span| span.to_range())
}

#[allow(dead_code)]
pub fn clear_cache() {
    let mut cache = PLACE_CACHE.write();
    cache.clear();
}

#[allow(dead_code)]
pub fn cache_size() -> usize {
    let cache = PLACE_CACHE.read();
    cache.len()
}

/// Whether a place string has already been decoded and cached
#[allow(dead_code)]
pub fn is_cached(place: &str) -> bool {
    PLACE_CACHE.read().contains_key(place.trim())
}
