//! Hackathon context passed to the ranking API

use serde::{Deserialize, Serialize};

/// The organization and hackathon a ranking operation belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonContext {
    pub organization_id: String,
    pub hackathon_id: String,
}

impl HackathonContext {
    pub fn new(organization_id: impl Into<String>, hackathon_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            hackathon_id: hackathon_id.into(),
        }
    }
}
