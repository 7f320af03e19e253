//! # Final Recommendations Model
//!
//! Structured output synthesized exactly once when a session reaches a
//! terminal node. Carries no timestamps so identical history always yields
//! byte-identical output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Residual risk attributed to the decision path taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// High certainty across the path
    Low,
    /// Mixed certainty
    Medium,
    /// Low certainty; the path needs review
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Invalid risk level: {s}")),
        }
    }
}

/// Risk summary derived from per-decision confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Open risk factors collected from low-confidence decisions
    pub factors: Vec<String>,
}

/// One step of the traversal, preserved for traceability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub node_id: String,
    pub selected_option: String,
}

/// Presentation-ready recommendation bundle for a completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalRecommendations {
    /// Narrative summary of the traversal
    pub overall_assessment: String,
    /// Ordered strategic actions resolved from the terminal node
    pub strategic_recommendations: Vec<String>,
    pub risk_assessment: RiskAssessment,
    /// Ordered immediate actions resolved from the terminal node
    pub next_steps: Vec<String>,
    /// The full decision path, verbatim from history
    pub decision_path: Vec<PathStep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_string_conversion() {
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
        assert_eq!("high".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert!("extreme".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_risk_level_serde() {
        let json = serde_json::to_string(&RiskLevel::Low).unwrap();
        assert_eq!(json, "\"low\"");
        let parsed: RiskLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RiskLevel::Low);
    }
}
