//! Judged submissions and the list holder that owns them

mod board;
mod model;

pub use board::*;
pub use model::*;
