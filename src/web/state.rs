//! # Web API Application State
//!
//! Shared state for the web API: the decision engine and the metadata the
//! health endpoint reports.

use std::sync::Arc;
use std::time::Instant;

use crate::engine::DecisionEngine;

/// Shared application state for the web API.
///
/// The engine owns all session mutation; handlers hold no state of their
/// own beyond this shared reference.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DecisionEngine>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(engine: Arc<DecisionEngine>) -> Self {
        Self {
            engine,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server came up, for the health endpoint
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
