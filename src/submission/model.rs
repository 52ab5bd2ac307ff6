//! Submission structures

use serde::{Deserialize, Serialize};

/// One judged entry in a hackathon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    /// Identifier sent to the ranking API, falls back to `id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<String>,
    /// `None` means unranked
    #[serde(default)]
    pub rank: Option<u32>,

    // Display fields, carried through untouched
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Submission {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn with_participant(mut self, participant_id: impl Into<String>) -> Self {
        self.participant_id = Some(participant_id.into());
        self
    }

    /// The id the ranking API knows this submission by
    #[inline]
    pub fn ranking_id(&self) -> &str {
        self.participant_id.as_deref().unwrap_or(&self.id)
    }

    #[inline]
    pub fn is_ranked(&self) -> bool {
        self.rank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_id_fallback() {
        let s = Submission::new("sub-1");
        assert_eq!(s.ranking_id(), "sub-1");

        let s = s.with_participant("team-9");
        assert_eq!(s.ranking_id(), "team-9");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id":"a","participantId":"p-a","rank":1,"name":"Alpha","score":91.5}"#;
        let s: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(s.participant_id.as_deref(), Some("p-a"));
        assert_eq!(s.rank, Some(1));
        assert_eq!(s.score, Some(91.5));
        assert!(s.avatar.is_none());

        let s: Submission = serde_json::from_str(r#"{"id":"b","rank":null}"#).unwrap();
        assert!(!s.is_ranked());
    }
}
