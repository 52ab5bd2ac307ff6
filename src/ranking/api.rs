//! Remote ranking API seam

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::HackathonContext;
use crate::error::ApiError;
use crate::ranking::RankEntry;

/// Body of the assign-ranks call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignRanksRequest {
    pub ranks: Vec<RankEntry>,
}

/// Backend reply to the assign-ranks call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignRanksResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AssignRanksResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    /// The message, if present and not blank
    pub fn explicit_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
    }
}

/// Persists rank assignments for a hackathon
#[async_trait]
pub trait RankingApi: Send + Sync {
    async fn assign_ranks(
        &self,
        context: &HackathonContext,
        request: AssignRanksRequest,
    ) -> Result<AssignRanksResponse, ApiError>;
}

#[async_trait]
impl<T: RankingApi + ?Sized> RankingApi for Arc<T> {
    async fn assign_ranks(
        &self,
        context: &HackathonContext,
        request: AssignRanksRequest,
    ) -> Result<AssignRanksResponse, ApiError> {
        (**self).assign_ranks(context, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialize() {
        let resp: AssignRanksResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(resp, AssignRanksResponse::ok());

        let resp: AssignRanksResponse =
            serde_json::from_str(r#"{"success":false,"message":"Judging closed"}"#).unwrap();
        assert_eq!(resp.explicit_message(), Some("Judging closed"));

        let resp = AssignRanksResponse::rejected("   ");
        assert_eq!(resp.explicit_message(), None);
    }
}
