// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations (string ids, RFC 3339 timestamps)
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ToastConfig;
use crate::domain::{
    CourseProgress, Lesson, LessonProgress, ResolvedVideoReference, Toast, VideoPresentation,
};
use crate::error::{AppError, AppResult};
use crate::services::LessonPlaybackView;

// ============================================================================
// VIDEO DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveVideoDto {
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoReferenceDto {
    pub embeddable_url: String,
    pub classification: String,
    pub presentation: VideoPresentation,
}

impl From<&ResolvedVideoReference> for VideoReferenceDto {
    fn from(reference: &ResolvedVideoReference) -> Self {
        Self {
            embeddable_url: reference.embeddable_url.clone(),
            classification: reference.classification.to_string(),
            presentation: VideoPresentation::for_reference(reference),
        }
    }
}

// ============================================================================
// NOTIFICATION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiseToastDto {
    pub message: String,
    /// "success", "error" or "info"; defaults to info
    #[serde(default)]
    pub kind: Option<String>,
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastDto {
    pub id: u64,
    pub message: String,
    pub kind: String,
    pub raised_at: String,
    pub expires_at: String,

    /// Containers keep the toast mounted this long after it closes
    pub exit_transition_ms: u64,
}

impl ToastDto {
    pub fn new(toast: &Toast, config: &ToastConfig) -> Self {
        Self {
            id: toast.id,
            message: toast.message.clone(),
            kind: toast.kind.to_string(),
            raised_at: toast.raised_at.to_rfc3339(),
            expires_at: toast.expires_at().to_rfc3339(),
            exit_transition_ms: config.exit_transition_ms,
        }
    }
}

// ============================================================================
// COURSE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonDto {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub order_index: u32,
    #[serde(default)]
    pub duration_minutes: u32,
}

impl From<&Lesson> for LessonDto {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id.to_string(),
            course_id: lesson.course_id.to_string(),
            title: lesson.title.clone(),
            content: lesson.content.clone(),
            video_url: lesson.video_url.clone(),
            order_index: lesson.order_index,
            duration_minutes: lesson.duration_minutes,
        }
    }
}

impl LessonDto {
    pub fn into_lesson(self) -> AppResult<Lesson> {
        Ok(Lesson {
            id: Uuid::parse_str(&self.id)?,
            course_id: Uuid::parse_str(&self.course_id)?,
            title: self.title,
            content: self.content,
            video_url: self.video_url,
            order_index: self.order_index,
            duration_minutes: self.duration_minutes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgressDto {
    pub lesson_id: String,
    pub completed: bool,
}

impl LessonProgressDto {
    pub fn into_progress(self) -> AppResult<LessonProgress> {
        Ok(LessonProgress {
            lesson_id: Uuid::parse_str(&self.lesson_id)?,
            completed: self.completed,
            completed_at: None,
        })
    }
}

impl From<&LessonProgress> for LessonProgressDto {
    fn from(progress: &LessonProgress) -> Self {
        Self {
            lesson_id: progress.lesson_id.to_string(),
            completed: progress.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteLessonDto {
    pub lesson_id: String,
    pub lessons: Vec<LessonDto>,
    #[serde(default)]
    pub progress: Vec<LessonProgressDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProgressDto {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
    pub progress: Vec<LessonProgressDto>,
}

impl CourseProgressDto {
    pub fn new(course_progress: CourseProgress, rows: &[LessonProgress]) -> Self {
        Self {
            completed: course_progress.completed,
            total: course_progress.total,
            percentage: course_progress.percentage,
            progress: rows.iter().map(LessonProgressDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlaybackDto {
    pub lesson_id: String,
    pub title: String,
    pub content: String,
    pub duration_minutes: u32,
    pub video: VideoReferenceDto,
}

impl From<&LessonPlaybackView> for LessonPlaybackDto {
    fn from(view: &LessonPlaybackView) -> Self {
        Self {
            lesson_id: view.lesson_id.to_string(),
            title: view.title.clone(),
            content: view.content.clone(),
            duration_minutes: view.duration_minutes,
            video: VideoReferenceDto::from(&view.reference),
        }
    }
}

/// Parse a list of lesson DTOs, failing on the first bad id
pub fn lessons_from_dtos(dtos: Vec<LessonDto>) -> AppResult<Vec<Lesson>> {
    dtos.into_iter().map(LessonDto::into_lesson).collect()
}

pub fn progress_from_dtos(dtos: Vec<LessonProgressDto>) -> AppResult<Vec<LessonProgress>> {
    dtos.into_iter().map(LessonProgressDto::into_progress).collect()
}

pub(crate) fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(AppError::from)
}
