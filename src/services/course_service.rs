// src/services/course_service.rs
//
// Course Service - Lesson playback and progress
//
// CRITICAL RULES:
// - Never talks to the hosted backend; callers pass the rows they loaded
// - Lesson videos are resolved on demand, never cached
// - Progress is derived, never stored here
// - User-facing failures are reported through the notification center

use std::sync::Arc;

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::course::{first_lesson, is_lesson_completed, sort_lessons};
use crate::domain::{
    validate_course, validate_lesson, Course, CourseProgress, DomainError, Lesson,
    LessonProgress, ResolvedVideoReference, VideoPresentation,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, LessonCompleted};
use crate::services::{NotificationCenter, VideoResolutionService};

/// Everything the viewer needs to render the selected lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlaybackView {
    pub lesson_id: Uuid,
    pub title: String,
    pub content: String,
    pub duration_minutes: u32,
    pub reference: ResolvedVideoReference,
    pub presentation: VideoPresentation,
}

/// One row of the lesson sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonOutlineEntry {
    pub lesson_id: Uuid,
    pub title: String,
    pub order_index: u32,
    pub duration_minutes: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOutline {
    pub course_id: Option<Uuid>,
    pub title: String,
    pub lessons: Vec<LessonOutlineEntry>,
    pub progress: CourseProgress,

    /// First lesson by order, preselected when the course opens
    pub selected: Option<LessonPlaybackView>,
}

pub struct CourseService {
    video_service: Arc<VideoResolutionService>,
    notifications: Arc<NotificationCenter>,
    event_bus: Arc<EventBus>,
}

impl CourseService {
    pub fn new(
        video_service: Arc<VideoResolutionService>,
        notifications: Arc<NotificationCenter>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            video_service,
            notifications,
            event_bus,
        }
    }

    pub fn playback_view(&self, lesson: &Lesson) -> LessonPlaybackView {
        let reference = self.video_service.resolve(&lesson.video_url);
        let presentation = VideoPresentation::for_reference(&reference);

        LessonPlaybackView {
            lesson_id: lesson.id,
            title: lesson.title.clone(),
            content: lesson.content.clone(),
            duration_minutes: lesson.duration_minutes,
            reference,
            presentation,
        }
    }

    pub fn course_outline(
        &self,
        course: &Course,
        mut lessons: Vec<Lesson>,
        progress: &[LessonProgress],
    ) -> CourseOutline {
        sort_lessons(&mut lessons);

        let entries = lessons
            .iter()
            .map(|lesson| LessonOutlineEntry {
                lesson_id: lesson.id,
                title: lesson.title.clone(),
                order_index: lesson.order_index,
                duration_minutes: lesson.duration_minutes,
                completed: is_lesson_completed(progress, lesson.id),
            })
            .collect();

        CourseOutline {
            course_id: course.id,
            title: course.title.clone(),
            lessons: entries,
            progress: CourseProgress::compute(&lessons, progress),
            selected: first_lesson(&lessons).map(|lesson| self.playback_view(lesson)),
        }
    }

    /// Check a course before it is sent to the backend
    pub fn save_course(&self, course: &Course) -> AppResult<()> {
        if let Err(err) = validate_course(course) {
            return Err(self.report(err));
        }
        let message = if course.is_persisted() {
            "Course updated"
        } else {
            "Course created"
        };
        self.notifications.success(message);
        Ok(())
    }

    /// Check a lesson before it is sent to the backend
    pub fn save_lesson(&self, course: &Course, lesson: &Lesson) -> AppResult<()> {
        if !course.is_persisted() {
            return Err(self.report(DomainError::InvariantViolation(
                "Save the course before adding lessons".to_string(),
            )));
        }
        if let Err(err) = validate_lesson(lesson) {
            return Err(self.report(err));
        }
        self.notifications.success("Lesson saved");
        Ok(())
    }

    /// Record a completed lesson (upsert on lesson id) and return the new
    /// course progress
    pub fn complete_lesson(
        &self,
        lessons: &[Lesson],
        progress: &mut Vec<LessonProgress>,
        lesson_id: Uuid,
    ) -> AppResult<CourseProgress> {
        let lesson = lessons
            .iter()
            .find(|lesson| lesson.id == lesson_id)
            .ok_or(AppError::NotFound)?;

        let row = LessonProgress::completed(lesson_id, Utc::now());
        match progress.iter_mut().find(|entry| entry.lesson_id == lesson_id) {
            Some(existing) => *existing = row,
            None => progress.push(row),
        }

        let course_progress = CourseProgress::compute(lessons, progress);
        debug!(
            "Lesson {} completed; course at {}%",
            lesson_id, course_progress.percentage
        );
        self.event_bus.emit(LessonCompleted::new(
            lesson_id,
            lesson.course_id,
            course_progress.percentage,
        ));
        Ok(course_progress)
    }

    fn report(&self, err: DomainError) -> AppError {
        let message = match &err {
            DomainError::InvariantViolation(message) | DomainError::NotFound(message) => {
                message.clone()
            }
        };
        self.notifications.error(message);
        AppError::Domain(err)
    }
}
