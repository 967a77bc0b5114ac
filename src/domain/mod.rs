// src/domain/mod.rs
//
// Domain Root
//
// Declares all domain modules and re-exports their public API.
// Other modules import from `crate::domain::*`.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod course;
pub mod notification;
pub mod video;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Video Domain
pub use video::{trim_descriptor, ResolvedVideoReference, VideoKind, VideoPresentation};

// Course Domain
pub use course::{
    validate_course, validate_lesson, Course, CourseLevel, CourseProgress, Lesson, LessonProgress,
};

// Notification Domain
pub use notification::{DismissReason, Toast, ToastKind};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
