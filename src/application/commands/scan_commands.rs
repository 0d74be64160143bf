// src/application/commands/scan_commands.rs

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::application::dto::{PlaybackViewDto, ScanResultDto};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::playback::{EmbedSignal, SessionId, UserAction};
use crate::error::AppError;

pub fn scan_code(state: &mut AppState, code: &str, now: NaiveDateTime) -> ScanResultDto {
    state
        .playback_controller
        .handle_scan(code, &state.resolution_service, now)
        .into()
}

/// Forward a load/HTTP signal from the embedded surface
pub fn report_embed_signal(
    state: &mut AppState,
    session_id: &str,
    signal: EmbedSignal,
) -> Result<PlaybackViewDto, String> {
    let session_id = Uuid::parse_str(session_id)
        .map(SessionId::from)
        .map_err(AppError::from)
        .to_error_response()?;

    state.playback_controller.on_embed_signal(session_id, signal);
    Ok(current_playback(state))
}

pub fn perform_user_action(state: &mut AppState, action: UserAction) -> PlaybackViewDto {
    state.playback_controller.reset(action);
    current_playback(state)
}

pub fn current_playback(state: &AppState) -> PlaybackViewDto {
    PlaybackViewDto::from(state.playback_controller.state())
}
