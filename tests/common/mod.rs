//! Shared helpers for integration tests.

pub mod builders;
pub mod strategies;

use std::sync::Arc;

use playbook_core::config::EngineConfig;
use playbook_core::engine::{ActionCatalog, DecisionEngine, RecommendationSynthesizer};
use playbook_core::models::DecisionGraph;
use playbook_core::playbooks::StaticPlaybookProvider;
use playbook_core::store::InMemorySessionStore;

/// Engine over an in-memory store and a single-graph catalog, with the
/// default configuration.
#[allow(dead_code)]
pub fn test_engine(graph: DecisionGraph) -> DecisionEngine {
    test_engine_with_catalog(graph, ActionCatalog::default())
}

#[allow(dead_code)]
pub fn test_engine_with_catalog(graph: DecisionGraph, catalog: ActionCatalog) -> DecisionEngine {
    let config = EngineConfig::default();
    let synthesizer = RecommendationSynthesizer::new(config.risk_policy.clone(), catalog);
    DecisionEngine::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(StaticPlaybookProvider::new().with_graph(graph)),
        synthesizer,
        config,
    )
}
