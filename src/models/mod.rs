pub mod decision_graph;
pub mod decision_record;
pub mod decision_session;
pub mod recommendations;

// Re-export core models for easy access
pub use decision_graph::{DecisionGraph, DecisionNode, DecisionOption, GraphValidationError};
pub use decision_record::DecisionRecord;
pub use decision_session::DecisionSession;
pub use recommendations::{FinalRecommendations, PathStep, RiskAssessment, RiskLevel};
