//! Pure transition table for the session lifecycle.
//!
//! The table is the single source of truth for which events are legal in
//! which state; the engine consults it before mutating a session.

use super::errors::{StateMachineError, StateMachineResult};
use super::events::SessionEvent;
use super::states::SessionStatus;

/// Determine the target state for an event, or fail if the transition is
/// not part of the lifecycle.
///
/// Lifecycle: `NotStarted -> Active` on start, `Active -> Active` on each
/// non-terminal decision, `Active -> Completed` on a decision that resolves
/// to a terminal node. `Completed` is absorbing for decisions; `Reset`
/// returns any started session to `Active`.
pub fn determine_target_state(
    current: SessionStatus,
    event: &SessionEvent,
) -> StateMachineResult<SessionStatus> {
    let target = match (current, event) {
        (SessionStatus::NotStarted, SessionEvent::Start) => SessionStatus::Active,

        (SessionStatus::Active, SessionEvent::Advance { .. }) => SessionStatus::Active,
        (SessionStatus::Active, SessionEvent::Complete { .. }) => SessionStatus::Completed,

        // "Start over" is legal from any started state
        (SessionStatus::Active, SessionEvent::Reset) => SessionStatus::Active,
        (SessionStatus::Completed, SessionEvent::Reset) => SessionStatus::Active,

        (from, event) => {
            return Err(StateMachineError::InvalidTransition {
                from,
                event: event.event_type(),
            })
        }
    };

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_transitions() {
        assert_eq!(
            determine_target_state(SessionStatus::NotStarted, &SessionEvent::Start).unwrap(),
            SessionStatus::Active
        );
        assert_eq!(
            determine_target_state(SessionStatus::Active, &SessionEvent::advance("Yes")).unwrap(),
            SessionStatus::Active
        );
        assert_eq!(
            determine_target_state(SessionStatus::Active, &SessionEvent::complete("Yes")).unwrap(),
            SessionStatus::Completed
        );
    }

    #[test]
    fn test_completed_is_absorbing_for_decisions() {
        assert!(
            determine_target_state(SessionStatus::Completed, &SessionEvent::advance("Yes"))
                .is_err()
        );
        assert!(
            determine_target_state(SessionStatus::Completed, &SessionEvent::complete("Yes"))
                .is_err()
        );
    }

    #[test]
    fn test_reset_returns_started_sessions_to_active() {
        assert_eq!(
            determine_target_state(SessionStatus::Active, &SessionEvent::Reset).unwrap(),
            SessionStatus::Active
        );
        assert_eq!(
            determine_target_state(SessionStatus::Completed, &SessionEvent::Reset).unwrap(),
            SessionStatus::Active
        );
        assert!(determine_target_state(SessionStatus::NotStarted, &SessionEvent::Reset).is_err());
    }

    #[test]
    fn test_cannot_start_twice() {
        assert!(determine_target_state(SessionStatus::Active, &SessionEvent::Start).is_err());
        assert!(determine_target_state(SessionStatus::Completed, &SessionEvent::Start).is_err());
    }
}
