//! In-memory ranking APIs for tests

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::sync::oneshot;

use crate::config::HackathonContext;
use crate::error::ApiError;
use crate::ranking::{AssignRanksRequest, AssignRanksResponse, RankingApi};

/// Answers each call with the next scripted reply
pub struct ScriptedApi {
    replies: Mutex<VecDeque<Result<AssignRanksResponse, ApiError>>>,
    requests: Mutex<Vec<AssignRanksRequest>>,
    contexts: Mutex<Vec<HackathonContext>>,
}

impl ScriptedApi {
    pub fn new(replies: Vec<Result<AssignRanksResponse, ApiError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            contexts: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with a transport error
    pub fn failing() -> Self {
        Self::new(Vec::new())
    }

    pub fn requests(&self) -> Vec<AssignRanksRequest> {
        self.requests.lock().clone()
    }

    pub fn contexts(&self) -> Vec<HackathonContext> {
        self.contexts.lock().clone()
    }
}

#[async_trait]
impl RankingApi for ScriptedApi {
    async fn assign_ranks(
        &self,
        context: &HackathonContext,
        request: AssignRanksRequest,
    ) -> Result<AssignRanksResponse, ApiError> {
        self.contexts.lock().push(context.clone());
        self.requests.lock().push(request);
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_string())))
    }
}

/// Holds each call open until the test sends its reply
pub struct GatedApi {
    gates: Mutex<VecDeque<oneshot::Receiver<AssignRanksResponse>>>,
    requests: Mutex<Vec<AssignRanksRequest>>,
}

impl GatedApi {
    pub fn new(calls: usize) -> (Self, Vec<oneshot::Sender<AssignRanksResponse>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..calls).map(|_| oneshot::channel()).unzip();
        let api = Self {
            gates: Mutex::new(receivers),
            requests: Mutex::new(Vec::new()),
        };
        (api, senders)
    }

    pub fn requests(&self) -> Vec<AssignRanksRequest> {
        self.requests.lock().clone()
    }

    pub async fn wait_for_requests(&self, count: usize) {
        while self.requests.lock().len() < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl RankingApi for GatedApi {
    async fn assign_ranks(
        &self,
        _context: &HackathonContext,
        request: AssignRanksRequest,
    ) -> Result<AssignRanksResponse, ApiError> {
        self.requests.lock().push(request);
        let gate = self.gates.lock().pop_front();
        match gate {
            Some(gate) => gate
                .await
                .map_err(|_| ApiError::Transport("gate closed".to_string())),
            None => Err(ApiError::Transport("no gate left".to_string())),
        }
    }
}
