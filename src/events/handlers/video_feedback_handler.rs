// src/events/handlers/video_feedback_handler.rs
//
// Video Feedback Handler
//
// Turns rejected video references into an error toast so the editor learns
// right away that pasted embed code cannot be played.
//
// CRITICAL RULES:
// - Only consumes VideoReferenceRejected
// - Delegates to NotificationCenter; no business logic here
// - Uses closure-based subscription

use std::sync::Arc;

use log::debug;

use crate::events::{EventBus, SubscriptionId, VideoReferenceRejected};
use crate::services::NotificationCenter;

pub const REJECTED_EMBED_MESSAGE: &str =
    "The embed code has no src attribute; paste the full iframe or a video link";

/// Registers the feedback handler. Returns the subscription so callers can
/// detach it again.
pub fn register_video_feedback_handlers(
    bus: &EventBus,
    notifications: Arc<NotificationCenter>,
) -> SubscriptionId {
    let id = bus.subscribe::<VideoReferenceRejected, _>(move |event| {
        debug!("Rejected video reference {}", event.fingerprint);
        notifications.error(REJECTED_EMBED_MESSAGE);
    });
    debug!("[VIDEO] Feedback handler registered");
    id
}
