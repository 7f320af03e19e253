// Decision engine module
//
// Session lifecycle ownership, transition validation, terminal detection,
// and recommendation synthesis for playbook traversals.

pub mod decision_engine;
pub mod errors;
pub mod synthesizer;

// Re-export main types for convenient access
pub use decision_engine::{DecisionEngine, DecisionSubmission};
pub use errors::{DecisionError, DecisionResult};
pub use synthesizer::{ActionCatalog, ActionSet, RecommendationSynthesizer, RiskPolicy};
