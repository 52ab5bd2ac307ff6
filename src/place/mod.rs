//! Prize tier place decoding
//!
//! Turns configured place strings like "1st", "2nd-3rd" or "First Place"
//! into the rank (or span of ranks) they award.

pub mod cache;
mod decoder;
pub mod parser;


pub use cache::*;
pub use decoder::*;
pub use parser::*;
