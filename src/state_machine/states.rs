use serde::{Deserialize, Serialize};
use std::fmt;

/// Session lifecycle states for a playbook traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Session has been named but never started; never reaches the store
    NotStarted,
    /// Session is positioned at a question node and accepting decisions
    Active,
    /// Session reached a terminal node and recommendations are frozen
    Completed,
}

impl SessionStatus {
    /// Check if this is a terminal state (no further decisions allowed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Check if this is an active state (session accepts decisions)
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not_started"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(Self::NotStarted),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Invalid session status: {s}")),
        }
    }
}

/// Default state for new sessions before `start_session` runs
impl Default for SessionStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}
