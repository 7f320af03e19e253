pub mod publisher;

// Re-export key types for convenience
pub use publisher::{LifecycleEvent, LifecycleEventPublisher, PublishError};
