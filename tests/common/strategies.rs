#![allow(dead_code)] // Only the property-based test binary uses these

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use playbook_core::models::DecisionRecord;

use super::builders::{linear_graph, GraphBuilder};
use playbook_core::models::DecisionGraph;

/// Strategy for generating valid confidence values
pub fn confidence_strategy() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

/// Strategy for generating confidence values outside [0, 1]
pub fn invalid_confidence_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        1.0001..10.0f64,
        -10.0..-0.0001f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
    ]
}

/// Strategy for generating short free-text rationales
pub fn rationale_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,]{1,80}"
}

/// Strategy for generating straight-line graphs of 1..=12 decisions
pub fn linear_graph_strategy() -> impl Strategy<Value = DecisionGraph> {
    (1usize..=12).prop_map(|depth| linear_graph("generated_playbook", depth))
}

/// Strategy for generating a branching graph where every decision node
/// offers the same two labels, paired with a random path through it.
pub fn branching_graph_with_path_strategy(
) -> impl Strategy<Value = (DecisionGraph, Vec<&'static str>)> {
    (1usize..=8)
        .prop_flat_map(|depth| {
            (
                Just(depth),
                proptest::collection::vec(
                    prop_oneof![Just("Proceed"), Just("Escalate")],
                    depth,
                ),
            )
        })
        .prop_map(|(depth, path)| {
            let mut builder = GraphBuilder::new("branching_playbook", "n0");
            for i in 0..depth {
                let id = format!("n{i}");
                let next = format!("n{}", i + 1);
                // Both labels advance to the same next node, keeping the
                // graph acyclic while letting the path vary freely.
                builder = builder.node(
                    &id,
                    &format!("Question {i}?"),
                    &[("Proceed", next.as_str()), ("Escalate", next.as_str())],
                );
            }
            (builder.terminal(&format!("n{depth}"), "Done").build(), path)
        })
}

/// Strategy for generating decision history records with a fixed
/// timestamp so byte-level comparisons only see synthesis behavior.
pub fn history_strategy() -> impl Strategy<Value = Vec<DecisionRecord>> {
    proptest::collection::vec(
        (
            "[a-z_]{1,12}",
            rationale_strategy(),
            confidence_strategy(),
            prop_oneof![Just("Proceed"), Just("Escalate"), Just("Settle")],
        )
            .prop_map(|(node_id, rationale, confidence, option)| DecisionRecord {
                node_id: node_id.clone(),
                question: format!("Question at {node_id}?"),
                selected_option: option.to_string(),
                rationale,
                confidence,
                research_context_consulted: vec![],
                decided_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            }),
        0..10,
    )
}
