// src/events/mod.rs
//
// Internal Event System - Public API

pub mod bus;
pub mod handlers;
pub mod types;
pub mod video_events;

pub use types::DomainEvent;

pub use types::{
    // Course
    LessonCompleted,
    // Notifications
    ToastDismissed,
    ToastRaised,
};

pub use bus::{EventBus, EventLogEntry, SubscriptionId};

pub use handlers::register_video_feedback_handlers;

pub use video_events::{
    VideoBatchResolved, VideoFingerprint, VideoReferenceRejected, VideoReferenceResolved,
};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
