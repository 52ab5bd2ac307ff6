//! Prize tier validation module

mod prize_tier;

#[cfg(test)]
mod property_tests;

pub use prize_tier::*;
