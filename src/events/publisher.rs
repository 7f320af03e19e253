use serde_json::Value;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Broadcast publisher for session lifecycle events.
///
/// Observational only: the engine publishes on start, each recorded
/// decision, completion, and reset, and proceeds identically whether or
/// not anything is listening.
#[derive(Debug, Clone)]
pub struct LifecycleEventPublisher {
    sender: broadcast::Sender<LifecycleEvent>,
}

/// Event that has been published
#[derive(Debug, Clone)]
pub struct LifecycleEvent {
    /// Event name from `constants::events`
    pub name: String,
    pub session_id: Uuid,
    pub case_id: String,
    pub playbook_id: String,
    /// Event-specific payload (node ids, option labels, status)
    pub context: Value,
    pub published_at: chrono::DateTime<chrono::Utc>,
}

impl LifecycleEventPublisher {
    /// Create a new publisher with the specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a lifecycle event for a session
    pub async fn publish(
        &self,
        event_name: impl Into<String>,
        session_id: Uuid,
        case_id: impl Into<String>,
        playbook_id: impl Into<String>,
        context: Value,
    ) -> Result<(), PublishError> {
        let event = LifecycleEvent {
            name: event_name.into(),
            session_id,
            case_id: case_id.into(),
            playbook_id: playbook_id.into(),
            context,
            published_at: chrono::Utc::now(),
        };

        // A send error only means there are no subscribers, which is an
        // acceptable steady state for lifecycle events.
        match self.sender.send(event) {
            Ok(_) => Ok(()),
            Err(broadcast::error::SendError(_)) => Ok(()),
        }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<LifecycleEvent> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Error types for event publishing
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Event channel is closed")]
    ChannelClosed,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Default for LifecycleEventPublisher {
    fn default() -> Self {
        Self::new(crate::constants::defaults::EVENT_CHANNEL_CAPACITY)
    }
}
