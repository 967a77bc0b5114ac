// src/application/commands/notification_commands.rs

use crate::application::dto::{RaiseToastDto, ToastDto};
use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::ToastKind;

pub fn raise_toast(state: &AppState, dto: RaiseToastDto) -> Result<ToastDto, String> {
    let kind = match dto.kind.as_deref() {
        None => ToastKind::default(),
        Some(raw) => ToastKind::parse(raw).ok_or_else(|| {
            ErrorResponse::validation(format!("Unknown toast kind: {}", raw)).to_json()
        })?,
    };

    if dto.message.trim().is_empty() {
        return Err(ErrorResponse::validation("Toast message is required".to_string()).to_json());
    }

    let center = &state.notification_center;
    let duration_ms = dto
        .duration_ms
        .unwrap_or(center.config().default_duration_ms);
    let toast = center.notify_with_duration(dto.message, kind, duration_ms);
    Ok(ToastDto::new(&toast, center.config()))
}

pub fn dismiss_toast(state: &AppState, toast_id: u64) -> Result<ToastDto, String> {
    let center = &state.notification_center;
    center
        .dismiss(toast_id)
        .map(|toast| ToastDto::new(&toast, center.config()))
        .to_error_response()
}

pub fn list_toasts(state: &AppState) -> Vec<ToastDto> {
    let center = &state.notification_center;
    center
        .active()
        .iter()
        .map(|toast| ToastDto::new(toast, center.config()))
        .collect()
}

pub fn expire_toasts(state: &AppState) -> Vec<ToastDto> {
    let center = &state.notification_center;
    center
        .expire()
        .iter()
        .map(|toast| ToastDto::new(toast, center.config()))
        .collect()
}
