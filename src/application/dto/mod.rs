// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain values only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::playback::PlaybackState;
use crate::domain::resolution::ResolutionOutcome;
use crate::services::{MediaAvailability, ScanDisposition};

// ============================================================================
// MEDIA DTOs
// ============================================================================

/// One card on the home screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaCardDto {
    pub id: String,
    pub date: String,
    pub title: String,
    pub thumbnail: String,
    pub available: bool,
    pub status: String, // "Available" or "Locked"
    pub reaction_available: bool,
    pub youtube_id: Option<String>,
}

impl From<MediaAvailability> for MediaCardDto {
    fn from(media: MediaAvailability) -> Self {
        let status = if media.available { "Available" } else { "Locked" };
        Self {
            status: status.to_string(),
            id: media.id,
            date: media.date,
            title: media.title,
            thumbnail: media.thumbnail,
            available: media.available,
            reaction_available: media.reaction_available,
            youtube_id: media.youtube_id,
        }
    }
}

// ============================================================================
// SCAN DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResultDto {
    pub accepted: bool,
    pub outcome: Option<ResolutionOutcome>,
    pub message: Option<String>,
    pub session_id: Option<String>,
}

impl From<ScanDisposition> for ScanResultDto {
    fn from(disposition: ScanDisposition) -> Self {
        match disposition {
            ScanDisposition::Started {
                outcome,
                session_id,
            } => Self {
                accepted: true,
                message: Some(outcome.status_message()),
                outcome: Some(outcome),
                session_id: session_id.map(|id| id.to_string()),
            },
            ScanDisposition::Ignored => Self {
                accepted: false,
                outcome: None,
                message: None,
                session_id: None,
            },
        }
    }
}

// ============================================================================
// PLAYBACK DTOs
// ============================================================================

/// What the scanner screen should render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackViewDto {
    pub state: String,
    pub session_id: Option<String>,
    pub url: Option<String>,
    pub message: Option<String>,
}

impl From<&PlaybackState> for PlaybackViewDto {
    fn from(state: &PlaybackState) -> Self {
        let message = match state {
            PlaybackState::Resolved { outcome } => Some(outcome.status_message()),
            PlaybackState::EmbedFailed { failure, .. }
            | PlaybackState::FallbackRequested { failure, .. } => Some(failure.user_message()),
            _ => None,
        };
        Self {
            state: state.name().to_string(),
            session_id: state.session_id().map(|id| id.to_string()),
            url: state.url().map(str::to_string),
            message,
        }
    }
}
