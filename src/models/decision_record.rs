//! # Decision Record Model
//!
//! One completed step in a session's history. Records snapshot the question
//! and research context at decision time so the audit trail stays stable
//! even if the graph is later re-authored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The persisted log entry for one question answered during a session.
///
/// History is append-only; ordering is traversal order and is significant
/// for decision-path display and recommendation aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Node the decision was made at
    pub node_id: String,
    /// Question text as presented at decision time
    pub question: String,
    /// Label of the option chosen
    pub selected_option: String,
    /// Free-text justification supplied by the decision-maker
    pub rationale: String,
    /// Decision-maker certainty in [0, 1]
    pub confidence: f64,
    /// Research context shown alongside the question at decision time
    pub research_context_consulted: Vec<String>,
    /// When the decision was recorded
    pub decided_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serde_round_trip() {
        let record = DecisionRecord {
            node_id: "start".to_string(),
            question: "What kind of dispute is this?".to_string(),
            selected_option: "Contract Breach".to_string(),
            rationale: "Signed agreement exists".to_string(),
            confidence: 0.85,
            research_context_consulted: vec!["UCC 2-207 summary".to_string()],
            decided_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: DecisionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
