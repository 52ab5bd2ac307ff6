//! Rank assignment and remote reconciliation module
//!
//! The pure rank change is computed once per call from a single snapshot,
//! applied optimistically to the caller's list, then persisted through the
//! ranking API and rolled back if the API rejects it.

mod api;
mod assign;
mod notify;
mod reconciler;
mod transaction;

#[cfg(test)]
mod test_support;


pub use api::*;
pub use assign::*;
pub use notify::*;
pub use reconciler::*;
pub use transaction::*;
