use thiserror::Error;

use super::states::SessionStatus;

/// Errors raised by the session transition table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateMachineError {
    #[error("cannot apply '{event}' to a session in state '{from}'")]
    InvalidTransition {
        from: SessionStatus,
        event: &'static str,
    },
}

pub type StateMachineResult<T> = Result<T, StateMachineError>;
