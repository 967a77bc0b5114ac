// src/lib.rs
// CourseHub - video reference core for a course platform
//
// Architecture:
// - Domain-centric: value objects and invariants live in domains
// - Event-driven: services announce outcomes through the event bus
// - Explicit: resolution is a pure function, no caching, no I/O
// - Application Layer: DTO boundary for the CLI and any UI shell

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_course,
    validate_lesson,
    // Course
    Course,
    CourseLevel,
    CourseProgress,
    // Notification
    DismissReason,
    Lesson,
    LessonProgress,
    // Video
    ResolvedVideoReference,
    Toast,
    ToastKind,
    VideoKind,
    VideoPresentation,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{AppConfig, ResolutionConfig, ToastConfig};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    register_video_feedback_handlers,
    DomainEvent,
    EventBus,
    EventLogEntry,
    LessonCompleted,
    SubscriptionId,
    ToastDismissed,
    ToastRaised,
    VideoBatchResolved,
    VideoFingerprint,
    VideoReferenceRejected,
    VideoReferenceResolved,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    resolve,
    youtube_embed_url,
    Clock,
    CourseOutline,
    // Course Service
    CourseService,
    LessonOutlineEntry,
    LessonPlaybackView,
    // Notification Center
    NotificationCenter,
    SystemClock,
    // Video Resolution
    VideoResolutionRules,
    VideoResolutionService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorType};

pub use application::commands;
pub use application::dto;
