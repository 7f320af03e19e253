//! # System Constants
//!
//! Core constants that define the operational boundaries of the playbook
//! decision engine: lifecycle event names, environment variable names, and
//! default configuration values.

/// Session lifecycle events published on the broadcast channel
pub mod events {
    pub const SESSION_STARTED: &str = "session.started";
    pub const SESSION_DECISION_RECORDED: &str = "session.decision_recorded";
    pub const SESSION_COMPLETED: &str = "session.completed";
    pub const SESSION_RESET: &str = "session.reset";
}

/// Environment variables consulted by `EngineConfig::from_env`
pub mod env {
    pub const MAX_TRAVERSAL_DEPTH: &str = "PLAYBOOK_MAX_TRAVERSAL_DEPTH";
    pub const REQUIRE_RATIONALE: &str = "PLAYBOOK_REQUIRE_RATIONALE";
    pub const RISK_LOW_THRESHOLD: &str = "PLAYBOOK_RISK_LOW_THRESHOLD";
    pub const RISK_MEDIUM_THRESHOLD: &str = "PLAYBOOK_RISK_MEDIUM_THRESHOLD";
    pub const RISK_FACTOR_THRESHOLD: &str = "PLAYBOOK_RISK_FACTOR_THRESHOLD";
    pub const EVENT_CHANNEL_CAPACITY: &str = "PLAYBOOK_EVENT_CHANNEL_CAPACITY";
    pub const BIND_ADDRESS: &str = "PLAYBOOK_BIND_ADDRESS";
}

/// Default configuration values
pub mod defaults {
    /// Hard cap on traversal length, bounding runaway graphs regardless
    /// of authoring mistakes
    pub const MAX_TRAVERSAL_DEPTH: u32 = 128;
    pub const REQUIRE_RATIONALE: bool = true;
    pub const EVENT_CHANNEL_CAPACITY: usize = 1000;
    pub const BIND_ADDRESS: &str = "0.0.0.0:8080";
}
