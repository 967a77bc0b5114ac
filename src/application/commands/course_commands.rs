// src/application/commands/course_commands.rs

use crate::application::dto::{
    lessons_from_dtos, parse_id, progress_from_dtos, CompleteLessonDto, CourseProgressDto,
    LessonDto, LessonPlaybackDto,
};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::error::AppResult;

pub fn lesson_playback(state: &AppState, lesson: LessonDto) -> Result<LessonPlaybackDto, String> {
    lesson
        .into_lesson()
        .map(|lesson| LessonPlaybackDto::from(&state.course_service.playback_view(&lesson)))
        .to_error_response()
}

pub fn complete_lesson(
    state: &AppState,
    dto: CompleteLessonDto,
) -> Result<CourseProgressDto, String> {
    complete_lesson_inner(state, dto).to_error_response()
}

fn complete_lesson_inner(state: &AppState, dto: CompleteLessonDto) -> AppResult<CourseProgressDto> {
    let lesson_id = parse_id(&dto.lesson_id)?;
    let lessons = lessons_from_dtos(dto.lessons)?;
    let mut progress = progress_from_dtos(dto.progress)?;

    let course_progress = state
        .course_service
        .complete_lesson(&lessons, &mut progress, lesson_id)?;
    Ok(CourseProgressDto::new(course_progress, &progress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn lesson_dto(course_id: Uuid, order_index: u32, video_url: &str) -> LessonDto {
        LessonDto {
            id: Uuid::new_v4().to_string(),
            course_id: course_id.to_string(),
            title: format!("Lesson {}", order_index + 1),
            content: String::new(),
            video_url: video_url.to_string(),
            order_index,
            duration_minutes: 10,
        }
    }

    #[test]
    fn test_lesson_playback() {
        let state = AppState::default();
        let dto = lesson_dto(Uuid::new_v4(), 0, "https://drive.google.com/file/d/XYZ789/view");

        let view = lesson_playback(&state, dto).unwrap();
        assert_eq!(view.video.classification, "google-drive");
        assert_eq!(
            view.video.embeddable_url,
            "https://drive.google.com/file/d/XYZ789/preview"
        );
    }

    #[test]
    fn test_lesson_playback_bad_id() {
        let state = AppState::default();
        let mut dto = lesson_dto(Uuid::new_v4(), 0, "");
        dto.id = "not-a-uuid".to_string();

        let err = lesson_playback(&state, dto).unwrap_err();
        assert!(err.contains("validation"));
    }

    #[test]
    fn test_complete_lesson() {
        let state = AppState::default();
        let course_id = Uuid::new_v4();
        let lessons = vec![
            lesson_dto(course_id, 0, ""),
            lesson_dto(course_id, 1, ""),
            lesson_dto(course_id, 2, ""),
        ];
        let dto = CompleteLessonDto {
            lesson_id: lessons[1].id.clone(),
            lessons,
            progress: Vec::new(),
        };

        let result = complete_lesson(&state, dto).unwrap();
        assert_eq!((result.completed, result.total, result.percentage), (1, 3, 33));
        assert_eq!(result.progress.len(), 1);
        assert!(result.progress[0].completed);
    }

    #[test]
    fn test_complete_missing_lesson() {
        let state = AppState::default();
        let dto = CompleteLessonDto {
            lesson_id: Uuid::new_v4().to_string(),
            lessons: vec![lesson_dto(Uuid::new_v4(), 0, "")],
            progress: Vec::new(),
        };

        let err = complete_lesson(&state, dto).unwrap_err();
        assert!(err.contains("not_found"));
    }
}
