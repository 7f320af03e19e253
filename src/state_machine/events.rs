use serde::{Deserialize, Serialize};

/// Events that can trigger session state transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    /// Begin a traversal at the graph root
    Start,
    /// Record a decision that leads to another question node
    Advance { selected_option: String },
    /// Record a decision that resolves to a terminal node
    Complete { selected_option: String },
    /// Discard history and return to the graph root
    Reset,
}

impl SessionEvent {
    /// Get a string representation of the event type for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Advance { .. } => "advance",
            Self::Complete { .. } => "complete",
            Self::Reset => "reset",
        }
    }

    /// Extract the chosen option label if this event records a decision
    pub fn selected_option(&self) -> Option<&str> {
        match self {
            Self::Advance { selected_option } | Self::Complete { selected_option } => {
                Some(selected_option)
            }
            _ => None,
        }
    }

    /// Check if this event represents a terminal transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// Create an advance event for the given option label
    pub fn advance(selected_option: impl Into<String>) -> Self {
        Self::Advance {
            selected_option: selected_option.into(),
        }
    }

    /// Create a completion event for the given option label
    pub fn complete(selected_option: impl Into<String>) -> Self {
        Self::Complete {
            selected_option: selected_option.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        assert_eq!(SessionEvent::Start.event_type(), "start");
        assert_eq!(SessionEvent::advance("Yes").event_type(), "advance");
        assert_eq!(SessionEvent::complete("No").event_type(), "complete");
        assert_eq!(SessionEvent::Reset.event_type(), "reset");
    }

    #[test]
    fn test_selected_option_extraction() {
        assert_eq!(SessionEvent::advance("Yes").selected_option(), Some("Yes"));
        assert_eq!(SessionEvent::Reset.selected_option(), None);
    }

    #[test]
    fn test_terminal_events() {
        assert!(SessionEvent::complete("Yes").is_terminal());
        assert!(!SessionEvent::advance("Yes").is_terminal());
        assert!(!SessionEvent::Start.is_terminal());
    }
}
