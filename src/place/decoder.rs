//! Pluggable place decoders

use crate::place::cache::decode_rank;

/// Decodes a prize tier place string into the rank it awards
pub trait PlaceDecoder {
    fn decode(&self, place: &str) -> Option<u32>;
}

/// Default decoder: digits with ordinal suffixes, ranges, and ordinal words
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalPlaceDecoder;

impl PlaceDecoder for OrdinalPlaceDecoder {
    #[inline]
    fn decode(&self, place: &str) -> Option<u32> {
        decode_rank(place)
    }
}

impl<F> PlaceDecoder for F
where
    F: Fn(&str) -> Option<u32>,
{
    #[inline]
    fn decode(&self, place: &str) -> Option<u32> {
        self(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_decoder() {
        let decoder = |place: &str| -> Option<u32> {
            place.strip_prefix('P').and_then(|n| n.parse().ok())
        };
        assert_eq!(decoder.decode("P3"), Some(3));
        assert_eq!(decoder.decode("3rd"), None);
        assert_eq!(OrdinalPlaceDecoder.decode("3rd"), Some(3));
    }
}
