//! # Decision Session Model
//!
//! The mutable unit of work: one in-progress or completed traversal of a
//! decision graph for a specific case. Sessions are owned by the decision
//! engine and mutated only through it; external code sees immutable copies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::decision_record::DecisionRecord;
use super::recommendations::FinalRecommendations;
use crate::state_machine::SessionStatus;

/// One traversal of a decision graph for a `(case, playbook)` pair.
///
/// `version` is the optimistic-concurrency token: the store bumps it on
/// every successful `put`, and submissions carrying a stale expected
/// version are rejected rather than interleaved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionSession {
    pub session_id: Uuid,
    pub case_id: String,
    pub playbook_id: String,
    /// Node the session is positioned at; `None` once terminal
    pub current_node_id: Option<String>,
    /// Append-only decision history in traversal order
    pub history: Vec<DecisionRecord>,
    pub status: SessionStatus,
    /// Present exactly when `status` is `Completed`, then frozen
    pub final_recommendations: Option<FinalRecommendations>,
    /// Optimistic-concurrency token, starts at 1 on create
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DecisionSession {
    /// Create a new active session positioned at the graph root
    pub fn new(
        case_id: impl Into<String>,
        playbook_id: impl Into<String>,
        root_node_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4(),
            case_id: case_id.into(),
            playbook_id: playbook_id.into(),
            current_node_id: Some(root_node_id.into()),
            history: Vec::new(),
            status: SessionStatus::Active,
            final_recommendations: None,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the session still accepts decisions
    pub fn is_active(&self) -> bool {
        self.status.is_active() && self.current_node_id.is_some()
    }

    /// Node ids already visited, in traversal order, including the current
    /// position. Used for cycle protection during traversal.
    pub fn visited_node_ids(&self) -> Vec<&str> {
        self.history
            .iter()
            .map(|record| record.node_id.as_str())
            .chain(self.current_node_id.as_deref())
            .collect()
    }

    /// Append a record and advance to the next question node
    pub fn advance_to(&mut self, record: DecisionRecord, next_node_id: impl Into<String>) {
        self.history.push(record);
        self.current_node_id = Some(next_node_id.into());
        self.status = SessionStatus::Active;
        self.updated_at = Utc::now();
    }

    /// Append the final record and freeze the session with its
    /// synthesized recommendations
    pub fn complete_with(&mut self, record: DecisionRecord, recommendations: FinalRecommendations) {
        self.history.push(record);
        self.current_node_id = None;
        self.status = SessionStatus::Completed;
        self.final_recommendations = Some(recommendations);
        self.updated_at = Utc::now();
    }

    /// Discard history and recommendations, returning to the graph root
    /// under the same session id
    pub fn reset_to(&mut self, root_node_id: impl Into<String>) {
        self.history.clear();
        self.final_recommendations = None;
        self.current_node_id = Some(root_node_id.into());
        self.status = SessionStatus::Active;
        self.updated_at = Utc::now();
    }
}
