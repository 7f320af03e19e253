//! Test data builders for decision graphs.

#![allow(dead_code)] // Not every test binary uses every builder

use std::collections::HashMap;

use playbook_core::models::{DecisionGraph, DecisionNode, DecisionOption};

/// Builder pattern for assembling test DecisionGraphs
pub struct GraphBuilder {
    playbook_id: String,
    root_node_id: String,
    nodes: HashMap<String, DecisionNode>,
}

impl GraphBuilder {
    pub fn new(playbook_id: &str, root_node_id: &str) -> Self {
        Self {
            playbook_id: playbook_id.to_string(),
            root_node_id: root_node_id.to_string(),
            nodes: HashMap::new(),
        }
    }

    /// Add a question node with `(label, next_node_id)` options
    pub fn node(mut self, id: &str, question: &str, options: &[(&str, &str)]) -> Self {
        self.nodes.insert(
            id.to_string(),
            DecisionNode {
                id: id.to_string(),
                question: question.to_string(),
                options: options
                    .iter()
                    .map(|(label, next)| DecisionOption {
                        label: (*label).to_string(),
                        next_node_id: (*next).to_string(),
                    })
                    .collect(),
                research_context: vec![],
            },
        );
        self
    }

    /// Add a question node that also carries research context references
    pub fn node_with_context(
        mut self,
        id: &str,
        question: &str,
        options: &[(&str, &str)],
        research_context: &[&str],
    ) -> Self {
        self = self.node(id, question, options);
        if let Some(node) = self.nodes.get_mut(id) {
            node.research_context = research_context.iter().map(|s| (*s).to_string()).collect();
        }
        self
    }

    /// Add a terminal node (no options)
    pub fn terminal(self, id: &str, question: &str) -> Self {
        self.node(id, question, &[])
    }

    pub fn build(self) -> DecisionGraph {
        DecisionGraph {
            playbook_id: self.playbook_id,
            root_node_id: self.root_node_id,
            nodes: self.nodes,
        }
    }
}

/// The two-decision contract-dispute graph used by the scenario tests:
/// start -> contract_analysis -> assessment (terminal).
pub fn contract_dispute_graph() -> DecisionGraph {
    GraphBuilder::new("contract_disputes", "start")
        .node_with_context(
            "start",
            "What kind of dispute is this?",
            &[("Contract Breach", "contract_analysis")],
            &["Restatement (Second) of Contracts overview"],
        )
        .node(
            "contract_analysis",
            "Was the breach material?",
            &[("Material Breach", "assessment")],
        )
        .terminal("assessment", "Assessment complete")
        .build()
}

/// A straight-line graph of `depth` decisions ending in a terminal node.
/// Node ids are `n0..n{depth}`; every option is labelled "Continue".
pub fn linear_graph(playbook_id: &str, depth: usize) -> DecisionGraph {
    let mut builder = GraphBuilder::new(playbook_id, "n0");
    for i in 0..depth {
        let id = format!("n{i}");
        let next = format!("n{}", i + 1);
        builder = builder.node(&id, &format!("Question {i}?"), &[("Continue", next.as_str())]);
    }
    builder
        .terminal(&format!("n{depth}"), "Path resolved")
        .build()
}

/// A graph whose single option loops straight back to the root,
/// exercising traversal-time cycle protection.
pub fn cyclic_graph(playbook_id: &str) -> DecisionGraph {
    GraphBuilder::new(playbook_id, "a")
        .node("a", "First?", &[("On", "b")])
        .node("b", "Second?", &[("Back", "a")])
        .build()
}
