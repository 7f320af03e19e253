//! # Decision Engine
//!
//! Owns the session lifecycle: starts traversals, validates and applies
//! decision submissions, detects terminal nodes, and freezes synthesized
//! recommendations. All session mutation flows through this engine; the
//! store and playbook provider are collaborator seams.

use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::errors::{DecisionError, DecisionResult};
use super::synthesizer::RecommendationSynthesizer;
use crate::config::EngineConfig;
use crate::constants::events;
use crate::events::LifecycleEventPublisher;
use crate::models::{DecisionGraph, DecisionNode, DecisionRecord, DecisionSession};
use crate::playbooks::PlaybookProvider;
use crate::state_machine::{determine_target_state, SessionEvent};
use crate::store::SessionStore;

/// One decision submitted against a session's current node.
#[derive(Debug, Clone)]
pub struct DecisionSubmission {
    /// Label of the option chosen on the current node
    pub selected_option: String,
    /// Free-text justification from the decision-maker
    pub rationale: String,
    /// Decision-maker certainty in [0, 1]
    pub confidence: f64,
    /// Session version the caller observed; mismatch means a concurrent
    /// submission won and the caller must refetch
    pub expected_version: i64,
}

/// Guided traversal engine over externally authored decision graphs.
///
/// Each operation is a single short-lived call: no internal background
/// tasks, no internal retries, no engine-side timeouts. Sessions for
/// different ids are fully independent.
pub struct DecisionEngine {
    store: Arc<dyn SessionStore>,
    playbooks: Arc<dyn PlaybookProvider>,
    synthesizer: RecommendationSynthesizer,
    publisher: LifecycleEventPublisher,
    config: EngineConfig,
}

impl DecisionEngine {
    pub fn new(
        store: Arc<dyn SessionStore>,
        playbooks: Arc<dyn PlaybookProvider>,
        synthesizer: RecommendationSynthesizer,
        config: EngineConfig,
    ) -> Self {
        let publisher = LifecycleEventPublisher::new(config.event_channel_capacity);
        Self {
            store,
            playbooks,
            synthesizer,
            publisher,
            config,
        }
    }

    /// Access the lifecycle event stream
    pub fn event_publisher(&self) -> &LifecycleEventPublisher {
        &self.publisher
    }

    /// Begin a new traversal for a `(case, playbook)` pair.
    ///
    /// Validates the graph's referential integrity up front so authoring
    /// defects fail fast here rather than mid-traversal, and rejects the
    /// call if an active session already holds the pair's slot.
    pub async fn start_session(
        &self,
        case_id: &str,
        playbook_id: &str,
    ) -> DecisionResult<DecisionSession> {
        if case_id.trim().is_empty() {
            return Err(DecisionError::validation("case_id cannot be empty"));
        }
        if playbook_id.trim().is_empty() {
            return Err(DecisionError::validation("playbook_id cannot be empty"));
        }

        let graph = self.playbooks.decision_graph(playbook_id).await?;
        graph
            .validate()
            .map_err(|e| DecisionError::graph_integrity(e.to_string()))?;

        let session = DecisionSession::new(case_id, playbook_id, graph.root_node_id.clone());
        let created = self.store.create(session).await?;

        info!(
            session_id = %created.session_id,
            case_id = %created.case_id,
            playbook_id = %created.playbook_id,
            root_node_id = %graph.root_node_id,
            "Decision session started"
        );

        self.publish(
            events::SESSION_STARTED,
            &created,
            json!({ "root_node_id": graph.root_node_id }),
        )
        .await;

        Ok(created)
    }

    /// Apply one decision to an active session.
    ///
    /// The updated session is built in full and swapped in with a single
    /// versioned `put`; no partial history entry can survive a failed
    /// validation step. Returns the stored session so the caller can
    /// re-render from the return value alone.
    pub async fn submit_decision(
        &self,
        session_id: Uuid,
        submission: DecisionSubmission,
    ) -> DecisionResult<DecisionSession> {
        self.validate_submission(&submission)?;

        let session = self.store.get(session_id).await?;
        let Some(current_node_id) = session.current_node_id.clone() else {
            return Err(DecisionError::SessionNotActive { session_id });
        };
        if !session.status.is_active() {
            return Err(DecisionError::SessionNotActive { session_id });
        }

        let graph = self.playbooks.decision_graph(&session.playbook_id).await?;
        let current_node = graph.node(&current_node_id).ok_or_else(|| {
            DecisionError::graph_integrity(format!(
                "current node '{current_node_id}' is missing from playbook '{}'",
                session.playbook_id
            ))
        })?;

        let option = current_node
            .option(&submission.selected_option)
            .ok_or_else(|| DecisionError::InvalidOption {
                node_id: current_node_id.clone(),
                selected_option: submission.selected_option.clone(),
            })?;

        // Defensive per-step check: graph validity was established at
        // start, but graphs may be re-supplied between steps.
        let next_node = graph.node(&option.next_node_id).ok_or_else(|| {
            DecisionError::graph_integrity(format!(
                "option '{}' on node '{current_node_id}' references missing node '{}'",
                option.label, option.next_node_id
            ))
        })?;

        self.check_loop_protection(&session, &graph, next_node)?;

        let record = DecisionRecord {
            node_id: current_node.id.clone(),
            question: current_node.question.clone(),
            selected_option: option.label.clone(),
            rationale: submission.rationale.clone(),
            confidence: submission.confidence,
            research_context_consulted: current_node.research_context.clone(),
            decided_at: chrono::Utc::now(),
        };

        let event = if next_node.is_terminal() {
            SessionEvent::complete(option.label.clone())
        } else {
            SessionEvent::advance(option.label.clone())
        };
        determine_target_state(session.status, &event)
            .map_err(|_| DecisionError::SessionNotActive { session_id })?;

        let mut updated = session;
        let terminal = next_node.is_terminal();
        if terminal {
            // Synthesis runs over the history as it will be frozen,
            // including the record being appended now.
            let mut final_history = updated.history.clone();
            final_history.push(record.clone());
            let recommendations = self.synthesizer.synthesize(next_node, &final_history);
            updated.complete_with(record, recommendations);
        } else {
            updated.advance_to(record, option.next_node_id.clone());
        }

        let stored = self
            .store
            .put(updated, submission.expected_version)
            .await?;

        debug!(
            session_id = %stored.session_id,
            node_id = %current_node_id,
            selected_option = %submission.selected_option,
            terminal,
            "Decision recorded"
        );

        self.publish(
            if terminal {
                events::SESSION_COMPLETED
            } else {
                events::SESSION_DECISION_RECORDED
            },
            &stored,
            json!({
                "node_id": current_node_id,
                "selected_option": submission.selected_option,
                "confidence": submission.confidence,
                "history_length": stored.history.len(),
            }),
        )
        .await;

        Ok(stored)
    }

    /// Read-only session fetch
    pub async fn get_session(&self, session_id: Uuid) -> DecisionResult<DecisionSession> {
        Ok(self.store.get(session_id).await?)
    }

    /// Discard history and recommendations, returning the session to the
    /// graph root under the same id ("start over").
    pub async fn reset_session(&self, session_id: Uuid) -> DecisionResult<DecisionSession> {
        let session = self.store.get(session_id).await?;

        determine_target_state(session.status, &SessionEvent::Reset)
            .map_err(|_| DecisionError::SessionNotActive { session_id })?;

        let graph = self.playbooks.decision_graph(&session.playbook_id).await?;
        if graph.node(&graph.root_node_id).is_none() {
            return Err(DecisionError::graph_integrity(format!(
                "root node '{}' is missing from playbook '{}'",
                graph.root_node_id, session.playbook_id
            )));
        }

        let expected_version = session.version;
        let mut updated = session;
        updated.reset_to(graph.root_node_id.clone());

        let stored = self.store.put(updated, expected_version).await?;

        info!(
            session_id = %stored.session_id,
            root_node_id = %graph.root_node_id,
            "Session reset to graph root"
        );

        self.publish(
            events::SESSION_RESET,
            &stored,
            json!({ "root_node_id": graph.root_node_id }),
        )
        .await;

        Ok(stored)
    }

    fn validate_submission(&self, submission: &DecisionSubmission) -> DecisionResult<()> {
        if !submission.confidence.is_finite()
            || !(0.0..=1.0).contains(&submission.confidence)
        {
            return Err(DecisionError::validation(format!(
                "confidence must be within [0, 1], got {}",
                submission.confidence
            )));
        }

        if self.config.require_rationale && submission.rationale.trim().is_empty() {
            return Err(DecisionError::validation("rationale cannot be empty"));
        }

        if submission.selected_option.trim().is_empty() {
            return Err(DecisionError::validation("selected_option cannot be empty"));
        }

        Ok(())
    }

    /// Traversal-time loop protection: graphs are validated referentially
    /// at start but never trusted to be acyclic.
    fn check_loop_protection(
        &self,
        session: &DecisionSession,
        graph: &DecisionGraph,
        next_node: &DecisionNode,
    ) -> DecisionResult<()> {
        if session
            .visited_node_ids()
            .iter()
            .any(|visited| *visited == next_node.id)
        {
            warn!(
                session_id = %session.session_id,
                node_id = %next_node.id,
                "Cycle detected in decision graph"
            );
            return Err(DecisionError::graph_integrity(format!(
                "cycle detected: node '{}' was already visited",
                next_node.id
            )));
        }

        let depth_after = session.history.len() + 1;
        let cap = (self.config.max_traversal_depth as usize).min(graph.node_count());
        if depth_after > cap {
            return Err(DecisionError::graph_integrity(format!(
                "traversal depth {depth_after} exceeds cap {cap}"
            )));
        }

        Ok(())
    }

    async fn publish(&self, name: &str, session: &DecisionSession, context: serde_json::Value) {
        // Lifecycle events are observational; a publish failure must not
        // fail the operation that triggered it.
        if let Err(e) = self
            .publisher
            .publish(
                name,
                session.session_id,
                session.case_id.clone(),
                session.playbook_id.clone(),
                context,
            )
            .await
        {
            warn!(event = name, error = %e, "Failed to publish lifecycle event");
        }
    }
}
