pub mod entity;
pub mod invariants;

pub use entity::{
    first_lesson, is_lesson_completed, sort_lessons, Course, CourseLevel, CourseProgress, Lesson,
    LessonProgress,
};
pub use invariants::{validate_course, validate_lesson};
