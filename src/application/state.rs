// src/application/state.rs

use std::sync::Arc;

use log::debug;

use crate::config::AppConfig;
use crate::events::{register_video_feedback_handlers, EventBus};
use crate::services::{CourseService, NotificationCenter, VideoResolutionService};

/// Shared application state.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub video_service: Arc<VideoResolutionService>,
    pub notification_center: Arc<NotificationCenter>,
    pub course_service: Arc<CourseService>,
    pub config: AppConfig,
}

impl AppState {
    /// Wire every service onto one event bus
    pub fn from_config(config: &AppConfig) -> Self {
        let event_bus = Arc::new(EventBus::new());

        let notification_center = Arc::new(NotificationCenter::new(
            Arc::clone(&event_bus),
            config.toast.clone(),
        ));
        let video_service = Arc::new(
            VideoResolutionService::new(Arc::clone(&event_bus))
                .with_events(config.resolution.emit_events),
        );
        let course_service = Arc::new(CourseService::new(
            Arc::clone(&video_service),
            Arc::clone(&notification_center),
            Arc::clone(&event_bus),
        ));

        register_video_feedback_handlers(&event_bus, Arc::clone(&notification_center));
        debug!(
            "Application state ready (video events: {})",
            config.resolution.emit_events
        );

        Self {
            event_bus,
            video_service,
            notification_center,
            course_service,
            config: config.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToastKind;

    #[test]
    fn test_rejected_markup_raises_toast() {
        let state = AppState::default();
        state.video_service.resolve("<iframe></iframe>");

        let toasts = state.notification_center.active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_disabled_events_stay_quiet() {
        let mut config = AppConfig::default();
        config.resolution.emit_events = false;
        let state = AppState::from_config(&config);

        state.video_service.resolve("<iframe></iframe>");
        assert!(state.notification_center.active().is_empty());
        assert!(state.event_bus.get_event_log().is_empty());
    }

    #[test]
    fn test_toast_config_is_applied() {
        let mut config = AppConfig::default();
        config.toast.default_duration_ms = 1500;
        let state = AppState::from_config(&config);

        assert_eq!(state.notification_center.info("hi").duration_ms, 1500);
    }
}
