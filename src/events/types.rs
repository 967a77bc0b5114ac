// events/types.rs
//
// Domain events for notifications and course progress.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DismissReason, Toast};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// NOTIFICATION EVENTS
// ============================================================================

/// Emitted when a toast is raised; containers render it on receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastRaised {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub toast: Toast,
}

impl ToastRaised {
    pub fn new(toast: Toast) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: toast.raised_at,
            toast,
        }
    }
}

impl DomainEvent for ToastRaised {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ToastRaised" }
}

/// Emitted when a toast leaves the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastDismissed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub toast_id: u64,
    pub reason: DismissReason,
}

impl ToastDismissed {
    pub fn new(toast_id: u64, reason: DismissReason) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            toast_id,
            reason,
        }
    }
}

impl DomainEvent for ToastDismissed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ToastDismissed" }
}

// ============================================================================
// COURSE EVENTS
// ============================================================================

/// Emitted when a learner completes a lesson
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub lesson_id: Uuid,
    pub course_id: Uuid,
    /// Course completion after this lesson, 0..=100
    pub course_percentage: u8,
}

impl LessonCompleted {
    pub fn new(lesson_id: Uuid, course_id: Uuid, course_percentage: u8) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            lesson_id,
            course_id,
            course_percentage,
        }
    }
}

impl DomainEvent for LessonCompleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LessonCompleted" }
}
