//! # Recommendation Synthesizer
//!
//! Pure aggregation over a completed session's history. Given identical
//! history and configuration the output is byte-identical: no randomness,
//! no wall-clock reads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{
    DecisionNode, DecisionRecord, FinalRecommendations, PathStep, RiskAssessment, RiskLevel,
};

/// Thresholds mapping mean path confidence to residual risk.
///
/// Confidence reflects certainty in the decisions made, treated as
/// inversely related to residual risk. The defaults (0.8 / 0.5 / 0.6) are
/// a policy choice carried in configuration so deployments can
/// recalibrate without a code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Mean confidence at or above this is low risk
    pub low_threshold: f64,
    /// Mean confidence at or above this (but below low) is medium risk
    pub medium_threshold: f64,
    /// Decisions below this confidence are collected as open risk factors
    pub factor_threshold: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            low_threshold: 0.8,
            medium_threshold: 0.5,
            factor_threshold: 0.6,
        }
    }
}

impl RiskPolicy {
    /// Classify a mean confidence value
    pub fn level_for(&self, mean_confidence: f64) -> RiskLevel {
        if mean_confidence >= self.low_threshold {
            RiskLevel::Low
        } else if mean_confidence >= self.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Canned action lists for one terminal outcome
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionSet {
    #[serde(default)]
    pub strategic_recommendations: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

/// Playbook-specific mapping from terminal-node identity to action lists.
///
/// Supplied as configuration alongside the graph; the engine never embeds
/// playbook recommendation text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionCatalog {
    /// Terminal node id -> actions for that outcome
    #[serde(default)]
    pub entries: HashMap<String, ActionSet>,
    /// Fallback for terminal nodes without a dedicated entry
    #[serde(default)]
    pub fallback: ActionSet,
}

impl ActionCatalog {
    pub fn with_entry(mut self, terminal_node_id: impl Into<String>, actions: ActionSet) -> Self {
        self.entries.insert(terminal_node_id.into(), actions);
        self
    }

    pub fn with_fallback(mut self, actions: ActionSet) -> Self {
        self.fallback = actions;
        self
    }

    fn resolve(&self, terminal_node_id: &str) -> &ActionSet {
        self.entries.get(terminal_node_id).unwrap_or(&self.fallback)
    }
}

/// Aggregates a final history into the presentation-ready bundle.
#[derive(Debug, Clone, Default)]
pub struct RecommendationSynthesizer {
    risk_policy: RiskPolicy,
    catalog: ActionCatalog,
}

impl RecommendationSynthesizer {
    pub fn new(risk_policy: RiskPolicy, catalog: ActionCatalog) -> Self {
        Self {
            risk_policy,
            catalog,
        }
    }

    /// Synthesize the final recommendation bundle for a session that
    /// reached `terminal_node` with the given (now frozen) history.
    pub fn synthesize(
        &self,
        terminal_node: &DecisionNode,
        history: &[DecisionRecord],
    ) -> FinalRecommendations {
        let mean_confidence = mean_confidence(history);
        let level = self.risk_policy.level_for(mean_confidence);

        let factors: Vec<String> = history
            .iter()
            .filter(|record| record.confidence < self.risk_policy.factor_threshold)
            .map(|record| {
                format!(
                    "Open risk: low-confidence decision ({:.2}) at '{}': {}",
                    record.confidence, record.question, record.rationale
                )
            })
            .collect();

        let actions = self.catalog.resolve(&terminal_node.id);

        let decision_path: Vec<PathStep> = history
            .iter()
            .map(|record| PathStep {
                node_id: record.node_id.clone(),
                selected_option: record.selected_option.clone(),
            })
            .collect();

        let overall_assessment = format!(
            "Resolved {} decision point(s) ending at '{}' with mean confidence {:.2}; \
             residual risk assessed as {}. {} decision(s) flagged for review.",
            history.len(),
            terminal_node.id,
            mean_confidence,
            level,
            factors.len()
        );

        FinalRecommendations {
            overall_assessment,
            strategic_recommendations: actions.strategic_recommendations.clone(),
            risk_assessment: RiskAssessment { level, factors },
            next_steps: actions.next_steps.clone(),
            decision_path,
        }
    }
}

/// Mean confidence across history; an empty history reads as zero
/// certainty and therefore high risk.
fn mean_confidence(history: &[DecisionRecord]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let total: f64 = history.iter().map(|record| record.confidence).sum();
    total / history.len() as f64
}
