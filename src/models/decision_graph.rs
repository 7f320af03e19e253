//! # Decision Graph Model
//!
//! The externally authored question graph for a single playbook. Graphs are
//! immutable once loaded and shared across sessions behind an `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// One branch option on a decision node.
///
/// Options are kept as an ordered list so presentation layers render them
/// in authoring order. Labels must be unique within a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    /// Human-readable label shown to the decision-maker
    pub label: String,
    /// Identifier of the node this option leads to
    pub next_node_id: String,
}

/// A single question point in a decision graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionNode {
    /// Unique identifier within the graph
    pub id: String,
    /// Prompt text presented to the decision-maker
    pub question: String,
    /// Ordered branch options; an empty list marks the node terminal
    #[serde(default)]
    pub options: Vec<DecisionOption>,
    /// Supporting-material references shown alongside the question.
    /// Informational only, never interpreted by the engine.
    #[serde(default)]
    pub research_context: Vec<String>,
}

impl DecisionNode {
    /// Check if this node ends a traversal (no outgoing options)
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }

    /// Look up an option by its label
    pub fn option(&self, label: &str) -> Option<&DecisionOption> {
        self.options.iter().find(|opt| opt.label == label)
    }

    /// Labels of all options in authoring order, for error messages and display
    pub fn option_labels(&self) -> Vec<&str> {
        self.options.iter().map(|opt| opt.label.as_str()).collect()
    }
}

/// Structural defects detectable without traversing a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphValidationError {
    #[error("root node '{root_node_id}' is not present in the graph")]
    MissingRoot { root_node_id: String },

    #[error("node '{node_id}' option '{label}' references missing node '{target}'")]
    DanglingOptionTarget {
        node_id: String,
        label: String,
        target: String,
    },

    #[error("node '{node_id}' declares option label '{label}' more than once")]
    DuplicateOptionLabel { node_id: String, label: String },

    #[error("node key '{key}' does not match embedded node id '{node_id}'")]
    MismatchedNodeId { key: String, node_id: String },
}

/// A named, rooted, directed graph of question nodes for one playbook.
///
/// Authoring is an external concern; the engine validates referential
/// integrity at session start and defensively re-checks during traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionGraph {
    /// Playbook this graph belongs to
    pub playbook_id: String,
    /// Entry point for every new session
    pub root_node_id: String,
    /// All nodes keyed by id
    pub nodes: HashMap<String, DecisionNode>,
}

impl DecisionGraph {
    /// Look up a node by id
    pub fn node(&self, node_id: &str) -> Option<&DecisionNode> {
        self.nodes.get(node_id)
    }

    /// Number of nodes, which bounds the longest acyclic path
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Validate referential integrity: the root exists, every option target
    /// exists, node keys match embedded ids, and option labels are unique
    /// per node. Cycle protection is enforced at traversal time instead,
    /// since graphs may be swapped between steps in some deployments.
    pub fn validate(&self) -> Result<(), GraphValidationError> {
        if !self.nodes.contains_key(&self.root_node_id) {
            return Err(GraphValidationError::MissingRoot {
                root_node_id: self.root_node_id.clone(),
            });
        }

        for (key, node) in &self.nodes {
            if key != &node.id {
                return Err(GraphValidationError::MismatchedNodeId {
                    key: key.clone(),
                    node_id: node.id.clone(),
                });
            }

            let mut seen = HashSet::new();
            for option in &node.options {
                if !seen.insert(option.label.as_str()) {
                    return Err(GraphValidationError::DuplicateOptionLabel {
                        node_id: node.id.clone(),
                        label: option.label.clone(),
                    });
                }

                if !self.nodes.contains_key(&option.next_node_id) {
                    return Err(GraphValidationError::DanglingOptionTarget {
                        node_id: node.id.clone(),
                        label: option.label.clone(),
                        target: option.next_node_id.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, options: &[(&str, &str)]) -> DecisionNode {
        DecisionNode {
            id: id.to_string(),
            question: format!("Question for {id}?"),
            options: options
                .iter()
                .map(|(label, next)| DecisionOption {
                    label: (*label).to_string(),
                    next_node_id: (*next).to_string(),
                })
                .collect(),
            research_context: vec![],
        }
    }

    fn graph(root: &str, nodes: Vec<DecisionNode>) -> DecisionGraph {
        DecisionGraph {
            playbook_id: "contract_disputes".to_string(),
            root_node_id: root.to_string(),
            nodes: nodes.into_iter().map(|n| (n.id.clone(), n)).collect(),
        }
    }

    #[test]
    fn test_valid_graph_passes_validation() {
        let g = graph(
            "start",
            vec![
                node("start", &[("Contract Breach", "contract_analysis")]),
                node("contract_analysis", &[]),
            ],
        );
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_missing_root_is_rejected() {
        let g = graph("absent", vec![node("start", &[])]);
        assert_eq!(
            g.validate(),
            Err(GraphValidationError::MissingRoot {
                root_node_id: "absent".to_string()
            })
        );
    }

    #[test]
    fn test_dangling_option_target_is_rejected() {
        let g = graph("start", vec![node("start", &[("Yes", "nowhere")])]);
        assert!(matches!(
            g.validate(),
            Err(GraphValidationError::DanglingOptionTarget { .. })
        ));
    }

    #[test]
    fn test_duplicate_option_label_is_rejected() {
        let g = graph(
            "start",
            vec![
                node("start", &[("Yes", "end"), ("Yes", "end")]),
                node("end", &[]),
            ],
        );
        assert!(matches!(
            g.validate(),
            Err(GraphValidationError::DuplicateOptionLabel { .. })
        ));
    }

    #[test]
    fn test_terminal_detection_and_option_lookup() {
        let branching = node("start", &[("Yes", "end")]);
        let terminal = node("end", &[]);

        assert!(!branching.is_terminal());
        assert!(terminal.is_terminal());
        assert_eq!(
            branching.option("Yes").map(|o| o.next_node_id.as_str()),
            Some("end")
        );
        assert!(branching.option("No").is_none());
    }

    #[test]
    fn test_graph_serde_round_trip() {
        let g = graph(
            "start",
            vec![node("start", &[("Yes", "end")]), node("end", &[])],
        );
        let json = serde_json::to_string(&g).unwrap();
        let parsed: DecisionGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, g);
    }
}
