// src/application/commands/media_commands.rs

use chrono::NaiveDateTime;

use crate::application::dto::MediaCardDto;
use crate::application::state::AppState;

/// Home screen cards, ordered by id
pub fn list_media(state: &AppState, now: NaiveDateTime) -> Vec<MediaCardDto> {
    state
        .resolution_service
        .overview(now)
        .into_iter()
        .map(MediaCardDto::from)
        .collect()
}
