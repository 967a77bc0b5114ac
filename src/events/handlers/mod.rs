// src/events/handlers/mod.rs
//
// Event Handlers
//
// Handlers use closure-based subscription via EventBus::subscribe.
// Only registration functions are exported.

pub mod video_feedback_handler;

pub use video_feedback_handler::{register_video_feedback_handlers, REJECTED_EMBED_MESSAGE};
