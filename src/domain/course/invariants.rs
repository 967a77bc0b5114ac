use super::entity::{Course, Lesson};
use crate::domain::{DomainError, DomainResult};

/// Validates Course invariants before a save is attempted
pub fn validate_course(course: &Course) -> DomainResult<()> {
    if course.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Course title is required".to_string(),
        ));
    }
    Ok(())
}

/// Validates Lesson invariants before a save is attempted
pub fn validate_lesson(lesson: &Lesson) -> DomainResult<()> {
    if lesson.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Lesson title is required".to_string(),
        ));
    }
    Ok(())
}

/// Critical Course/Lesson Invariants:
///
/// 1. A lesson belongs to exactly one course (course_id required)
/// 2. A lesson can only be saved once its course has been saved
/// 3. The video field is stored raw; it is never rejected at save time
/// 4. Display order is order_index ascending
