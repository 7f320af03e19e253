#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Playbook Core
//!
//! Rust core of the playbook decision engine for the case-management
//! application: guided traversal of externally authored decision graphs
//! with per-step rationale and confidence capture, optimistic session
//! concurrency, and deterministic recommendation synthesis at terminal
//! nodes.
//!
//! ## Architecture
//!
//! The engine owns the session lifecycle and is the only writer of
//! session state. Graph authoring and durable persistence are external
//! collaborators behind the [`playbooks::PlaybookProvider`] and
//! [`store::SessionStore`] seams; the presentation layer consumes the
//! engine through the [`web`] HTTP surface or directly as a library.
//!
//! ## Module Organization
//!
//! - [`models`] - Decision graphs, sessions, history records, recommendations
//! - [`state_machine`] - Session lifecycle states and transition table
//! - [`engine`] - The decision engine and recommendation synthesizer
//! - [`store`] - Session persistence seam and in-memory reference store
//! - [`playbooks`] - Read-only decision graph resolution seam
//! - [`events`] - Session lifecycle event broadcasting
//! - [`web`] - Axum HTTP surface for the four engine operations
//! - [`config`] - Engine configuration
//! - [`error`] - Crate-level error categories
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use playbook_core::config::EngineConfig;
//! use playbook_core::engine::{DecisionEngine, RecommendationSynthesizer};
//! use playbook_core::playbooks::StaticPlaybookProvider;
//! use playbook_core::store::InMemorySessionStore;
//!
//! # async fn example(graph: playbook_core::models::DecisionGraph)
//! # -> Result<(), Box<dyn std::error::Error>> {
//! let engine = DecisionEngine::new(
//!     Arc::new(InMemorySessionStore::new()),
//!     Arc::new(StaticPlaybookProvider::new().with_graph(graph)),
//!     RecommendationSynthesizer::default(),
//!     EngineConfig::default(),
//! );
//!
//! let session = engine.start_session("case-42", "contract_disputes").await?;
//! println!("Session {} at node {:?}", session.session_id, session.current_node_id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod logging;
pub mod models;
pub mod playbooks;
pub mod state_machine;
pub mod store;
pub mod web;

pub use config::EngineConfig;
pub use engine::{
    ActionCatalog, ActionSet, DecisionEngine, DecisionError, DecisionResult, DecisionSubmission,
    RecommendationSynthesizer, RiskPolicy,
};
pub use error::{PlaybookError, Result};
pub use models::{
    DecisionGraph, DecisionNode, DecisionOption, DecisionRecord, DecisionSession,
    FinalRecommendations, PathStep, RiskAssessment, RiskLevel,
};
pub use state_machine::{SessionEvent, SessionStatus};
pub use store::{InMemorySessionStore, SessionStore, StoreError};
