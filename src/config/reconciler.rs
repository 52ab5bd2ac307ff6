//! Reconciler behaviour configuration

use serde::Deserialize;

/// How overlapping `assign_rank` calls are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcurrencyMode {
    /// Calls run as soon as they are made and race on the shared snapshot
    #[default]
    Unguarded,
    /// Calls queue behind each other; each snapshots after the previous one settles
    SingleFlight,
}

/// Reconciler configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReconcilerConfig {
    /// Notification text when the backend accepts the ranks and gives no message
    #[serde(default = "default_success_message")]
    pub success_message: String,
    /// Notification text when no more specific failure message is available
    #[serde(default = "default_failure_message")]
    pub failure_message: String,
    #[serde(default)]
    pub concurrency: ConcurrencyMode,
}

fn default_success_message() -> String {
    "Ranks assigned successfully".into()
}

fn default_failure_message() -> String {
    "Failed to assign ranks".into()
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            success_message: default_success_message(),
            failure_message: default_failure_message(),
            concurrency: ConcurrencyMode::default(),
        }
    }
}
