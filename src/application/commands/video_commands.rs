// src/application/commands/video_commands.rs

use crate::application::dto::{ResolveVideoDto, VideoReferenceDto};
use crate::application::state::AppState;

pub fn resolve_video(state: &AppState, dto: ResolveVideoDto) -> VideoReferenceDto {
    let reference = state.video_service.resolve(&dto.input);
    VideoReferenceDto::from(&reference)
}

/// YouTube-only conversion; anything else comes back trimmed
pub fn youtube_embed(state: &AppState, dto: ResolveVideoDto) -> String {
    state.video_service.youtube_embed_url(&dto.input)
}

pub fn resolve_videos(state: &AppState, inputs: Vec<String>) -> Vec<VideoReferenceDto> {
    state
        .video_service
        .resolve_batch(inputs)
        .iter()
        .map(VideoReferenceDto::from)
        .collect()
}
