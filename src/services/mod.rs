// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod course_service;
pub mod notification_service;
pub mod video_resolution_service;


pub use video_resolution_service::{
    resolve,
    youtube_embed_url,
    VideoResolutionRules,
    VideoResolutionService,
};

pub use notification_service::{
    Clock,
    NotificationCenter,
    SystemClock,
};

pub use course_service::{
    CourseOutline,
    CourseService,
    LessonOutlineEntry,
    LessonPlaybackView,
};
