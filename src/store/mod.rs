//! # Session Store
//!
//! Persistence collaborator for decision sessions. The engine talks to the
//! store through the [`SessionStore`] trait only; durable backends live in
//! surrounding application layers. `put` carries the expected version so
//! concurrent submissions against one session are rejected, not
//! interleaved.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::DecisionSession;

pub use memory::InMemorySessionStore;

/// Errors surfaced by session store implementations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("session '{session_id}' not found")]
    NotFound { session_id: Uuid },

    #[error("session '{session_id}' version conflict: expected {expected}, stored {stored}")]
    VersionConflict {
        session_id: Uuid,
        expected: i64,
        stored: i64,
    },

    #[error("an active session already exists for case '{case_id}' and playbook '{playbook_id}'")]
    ActiveSessionExists {
        case_id: String,
        playbook_id: String,
    },

    #[error("session store backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract for decision sessions.
///
/// Implementations must enforce two invariants: at most one `Active`
/// session per `(case_id, playbook_id)` pair, and compare-and-swap
/// semantics on `put`. All calls are expected to complete or fail within a
/// bounded time; retry policy belongs to the caller.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a brand-new session, claiming the active slot for its
    /// `(case, playbook)` pair
    async fn create(&self, session: DecisionSession) -> StoreResult<DecisionSession>;

    /// Fetch a session by id
    async fn get(&self, session_id: Uuid) -> StoreResult<DecisionSession>;

    /// Replace a session if the stored version matches `expected_version`,
    /// bumping the version on success and returning the stored result
    async fn put(
        &self,
        session: DecisionSession,
        expected_version: i64,
    ) -> StoreResult<DecisionSession>;

    /// Fetch the active session for a `(case, playbook)` pair, if any
    async fn get_active(
        &self,
        case_id: &str,
        playbook_id: &str,
    ) -> StoreResult<Option<DecisionSession>>;
}
