//! # Decision Engine Errors
//!
//! The engine-boundary error taxonomy. Every kind is surfaced verbatim to
//! the caller; the engine never retries internally and never swallows a
//! failure into a fallback path.

use thiserror::Error;
use uuid::Uuid;

use crate::playbooks::ProviderError;
use crate::store::StoreError;

/// Errors surfaced by decision engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// A referenced node id is missing from the graph, or traversal
    /// detected a cycle or runaway depth. Fatal to the call; the session
    /// is left unmutated.
    #[error("decision graph integrity violation: {message}")]
    GraphIntegrity { message: String },

    /// Submitted option is not present on the current node; the caller
    /// should re-prompt.
    #[error("option '{selected_option}' is not available on node '{node_id}'")]
    InvalidOption {
        node_id: String,
        selected_option: String,
    },

    /// Decision submitted to a session that no longer accepts decisions;
    /// the caller should fetch the final recommendations instead.
    #[error("session '{session_id}' is not active")]
    SessionNotActive { session_id: Uuid },

    #[error("session '{session_id}' not found")]
    SessionNotFound { session_id: Uuid },

    /// Concurrent modification detected via version mismatch; the caller
    /// must refetch and retry.
    #[error("session '{session_id}' was modified concurrently: expected version {expected}")]
    StaleSession { session_id: Uuid, expected: i64 },

    #[error("an active session already exists for case '{case_id}' and playbook '{playbook_id}'")]
    DuplicateActiveSession {
        case_id: String,
        playbook_id: String,
    },

    #[error("playbook '{playbook_id}' not found")]
    PlaybookNotFound { playbook_id: String },

    #[error("validation failed: {message}")]
    Validation { message: String },

    /// Bounded collaborator failure (store or provider backend)
    #[error("storage failure: {message}")]
    Storage { message: String },
}

impl DecisionError {
    pub fn graph_integrity(message: impl Into<String>) -> Self {
        Self::GraphIntegrity {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<StoreError> for DecisionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { session_id } => Self::SessionNotFound { session_id },
            StoreError::VersionConflict {
                session_id,
                expected,
                ..
            } => Self::StaleSession {
                session_id,
                expected,
            },
            StoreError::ActiveSessionExists {
                case_id,
                playbook_id,
            } => Self::DuplicateActiveSession {
                case_id,
                playbook_id,
            },
            StoreError::Backend(message) => Self::Storage { message },
        }
    }
}

impl From<ProviderError> for DecisionError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::PlaybookNotFound { playbook_id } => {
                Self::PlaybookNotFound { playbook_id }
            }
            ProviderError::Backend(message) => Self::Storage { message },
        }
    }
}

pub type DecisionResult<T> = Result<T, DecisionError>;
