use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{trim_descriptor, ResolvedVideoReference};

/// A course as edited by team administrators.
/// Persistence belongs to the hosted backend; `id` is `None` until saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub instructor: String,

    /// Free-form duration label ("6 weeks", "3h")
    pub duration: String,

    pub level: CourseLevel,
    pub image_url: String,
    pub is_public: bool,
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Course {
    /// Blank course as shown by the editor before the first save
    pub fn draft() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            instructor: String::new(),
            duration: String::new(),
            level: CourseLevel::Beginner,
            image_url: String::new(),
            is_public: true,
            team_id: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// A single lesson inside a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub content: String,

    /// Raw editor input: a URL or embed markup, resolved before rendering
    pub video_url: String,

    pub order_index: u32,
    pub duration_minutes: u32,
}

impl Lesson {
    /// New lesson appended after the existing ones
    pub fn draft(course_id: Uuid, existing_lessons: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_id,
            title: String::new(),
            content: String::new(),
            video_url: String::new(),
            order_index: u32::try_from(existing_lessons).unwrap_or(u32::MAX),
            duration_minutes: 0,
        }
    }

    pub fn has_video(&self) -> bool {
        !trim_descriptor(&self.video_url).is_empty()
    }

    /// Resolve the raw video field; never cached
    pub fn video_reference(&self) -> ResolvedVideoReference {
        crate::services::resolve(&self.video_url)
    }
}

/// Completion state of one lesson for one enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub lesson_id: Uuid,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl LessonProgress {
    pub fn completed(lesson_id: Uuid, at: DateTime<Utc>) -> Self {
        Self {
            lesson_id,
            completed: true,
            completed_at: Some(at),
        }
    }
}

/// Derived completion summary for a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub completed: usize,
    pub total: usize,

    /// Rounded to the nearest whole percent, 0..=100
    pub percentage: u8,
}

impl CourseProgress {
    /// Counts lessons that have a completed progress row.
    /// Rows for lessons outside `lessons` are ignored.
    pub fn compute(lessons: &[Lesson], progress: &[LessonProgress]) -> Self {
        let total = lessons.len();
        let completed = lessons
            .iter()
            .filter(|lesson| is_lesson_completed(progress, lesson.id))
            .count();

        Self {
            completed,
            total,
            percentage: Self::percentage_of(completed, total),
        }
    }

    /// Round-half-up integer percentage
    fn percentage_of(completed: usize, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        let completed = completed.min(total) as u64;
        let total = total as u64;
        ((completed * 200 + total) / (total * 2)) as u8
    }

    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

pub fn is_lesson_completed(progress: &[LessonProgress], lesson_id: Uuid) -> bool {
    progress
        .iter()
        .any(|entry| entry.lesson_id == lesson_id && entry.completed)
}

/// Orders lessons by `order_index`; ties keep their input order
pub fn sort_lessons(lessons: &mut [Lesson]) {
    lessons.sort_by_key(|lesson| lesson.order_index);
}

/// Lesson opened by default: lowest `order_index`, earliest on ties
pub fn first_lesson(lessons: &[Lesson]) -> Option<&Lesson> {
    lessons
        .iter()
        .enumerate()
        .min_by_key(|(pos, lesson)| (lesson.order_index, *pos))
        .map(|(_, lesson)| lesson)
}
