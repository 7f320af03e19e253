//! # Playbook Provider
//!
//! Read-only collaborator seam for the playbook-authoring service. The
//! engine resolves the decision graph for a playbook id at every operation
//! rather than caching it per session, so deployments that version graphs
//! per step behave correctly.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::models::DecisionGraph;

/// Errors surfaced by playbook provider implementations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("playbook '{playbook_id}' not found")]
    PlaybookNotFound { playbook_id: String },

    #[error("playbook provider backend failure: {0}")]
    Backend(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Resolves decision graphs by playbook id.
///
/// Graphs are immutable and shared; implementations return the same `Arc`
/// for repeated lookups of an unchanged playbook.
#[async_trait]
pub trait PlaybookProvider: Send + Sync {
    async fn decision_graph(&self, playbook_id: &str) -> ProviderResult<Arc<DecisionGraph>>;
}

/// Fixed in-process catalog of graphs, used by tests and the bundled
/// server binary.
#[derive(Debug, Default)]
pub struct StaticPlaybookProvider {
    graphs: HashMap<String, Arc<DecisionGraph>>,
}

impl StaticPlaybookProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a graph under its own playbook id
    pub fn with_graph(mut self, graph: DecisionGraph) -> Self {
        self.graphs.insert(graph.playbook_id.clone(), Arc::new(graph));
        self
    }

    /// Load every `*.json` graph file from a directory.
    ///
    /// Files that fail to parse abort the load; a catalog with silently
    /// missing playbooks is worse than a startup failure.
    pub fn from_directory(dir: impl AsRef<Path>) -> ProviderResult<Self> {
        let dir = dir.as_ref();
        let mut provider = Self::new();

        let entries = std::fs::read_dir(dir)
            .map_err(|e| ProviderError::Backend(format!("cannot read {}: {e}", dir.display())))?;

        for entry in entries {
            let entry =
                entry.map_err(|e| ProviderError::Backend(format!("directory walk failed: {e}")))?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let raw = std::fs::read_to_string(&path)
                .map_err(|e| ProviderError::Backend(format!("cannot read {}: {e}", path.display())))?;
            let graph: DecisionGraph = serde_json::from_str(&raw).map_err(|e| {
                ProviderError::Backend(format!("invalid graph in {}: {e}", path.display()))
            })?;

            info!(
                playbook_id = %graph.playbook_id,
                nodes = graph.node_count(),
                path = %path.display(),
                "Loaded playbook graph"
            );
            provider
                .graphs
                .insert(graph.playbook_id.clone(), Arc::new(graph));
        }

        Ok(provider)
    }

    pub fn playbook_ids(&self) -> Vec<&str> {
        self.graphs.keys().map(String::as_str).collect()
    }
}

#[async_trait]
impl PlaybookProvider for StaticPlaybookProvider {
    async fn decision_graph(&self, playbook_id: &str) -> ProviderResult<Arc<DecisionGraph>> {
        self.graphs
            .get(playbook_id)
            .cloned()
            .ok_or_else(|| ProviderError::PlaybookNotFound {
                playbook_id: playbook_id.to_string(),
            })
    }
}
