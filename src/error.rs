//! Error types for the rewards core

use thiserror::Error;

/// Main error type for the rewards core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewardsError {
    #[error("Submission not found: {0}")]
    SubmissionNotFound(String),

    #[error("Rank {rank} is outside 1..={max_rank}")]
    RankOutOfRange { rank: u32, max_rank: u32 },

    #[error("Invalid place: {0}")]
    InvalidPlace(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for RewardsError {
    fn from(err: serde_json::Error) -> Self {
        RewardsError::DeserializationError(err.to_string())
    }
}

/// Failure reported by a [`RankingApi`](crate::ranking::RankingApi) implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection reset, DNS, timeout upstream)
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Human-readable message, if the error carries a non-empty one
    pub fn message(&self) -> Option<&str> {
        let msg = match self {
            ApiError::Transport(msg) => msg.as_str(),
            ApiError::Status { message, .. } => message.as_str(),
        };
        let msg = msg.trim();
        if msg.is_empty() {
            None
        } else {
            Some(msg)
        }
    }
}

/// Result type alias for the rewards core
pub type Result<T> = std::result::Result<T, RewardsError>;
