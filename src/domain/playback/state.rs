// src/domain/playback/state.rs
//
// Playback lifecycle of one scan session.
//
// Idle → Resolved → { Embedding → Playing | EmbedFailed } → FallbackRequested → Idle
//
// Transitions are performed by the PlaybackController; these types only
// describe the states and the signals that drive them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::resolution::ResolutionOutcome;

/// Tags one embed instance. Signals carrying another id are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of one scan-to-playback cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlaybackState {
    /// No active scan result
    Idle,

    /// A scan was resolved. Terminal for the session unless unlocked.
    Resolved { outcome: ResolutionOutcome },

    /// The presentation layer was asked to load `url` in an embedded surface
    Embedding { session_id: SessionId, url: String },

    /// The embedded surface reported a successful load
    Playing { session_id: SessionId, url: String },

    /// The embedded surface reported a failure
    EmbedFailed {
        session_id: SessionId,
        url: String,
        failure: EmbedFailure,
    },

    /// The url was handed to the external opener
    FallbackRequested { url: String, failure: EmbedFailure },
}

impl PlaybackState {
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Resolved { .. } => "resolved",
            PlaybackState::Embedding { .. } => "embedding",
            PlaybackState::Playing { .. } => "playing",
            PlaybackState::EmbedFailed { .. } => "embed_failed",
            PlaybackState::FallbackRequested { .. } => "fallback_requested",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PlaybackState::Idle)
    }

    /// Session of the live embed, if any
    pub fn session_id(&self) -> Option<SessionId> {
        match self {
            PlaybackState::Embedding { session_id, .. }
            | PlaybackState::Playing { session_id, .. }
            | PlaybackState::EmbedFailed { session_id, .. } => Some(*session_id),
            _ => None,
        }
    }

    /// Url the session is working with, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            PlaybackState::Embedding { url, .. }
            | PlaybackState::Playing { url, .. }
            | PlaybackState::EmbedFailed { url, .. }
            | PlaybackState::FallbackRequested { url, .. } => Some(url),
            PlaybackState::Resolved { outcome } => outcome.normalized_url(),
            PlaybackState::Idle => None,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        PlaybackState::Idle
    }
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Why an embed failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmbedFailure {
    LoadError { description: String },
    HttpError { status_code: u16, description: String },
}

impl EmbedFailure {
    /// Short reason attached to the fallback request
    pub fn reason(&self) -> String {
        match self {
            EmbedFailure::LoadError { .. } => "webview-error".to_string(),
            EmbedFailure::HttpError { status_code, .. } => format!("http-{}", status_code),
        }
    }

    /// Informational notice shown before the external browser opens
    pub fn user_message(&self) -> String {
        match self {
            EmbedFailure::LoadError { .. } => {
                "Playback error: Web player failed, opening in browser as fallback.".to_string()
            }
            EmbedFailure::HttpError { status_code, .. } => format!(
                "Playback HTTP error: Status {}, opening in browser as fallback.",
                status_code
            ),
        }
    }
}

impl std::fmt::Display for EmbedFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedFailure::LoadError { description } => write!(f, "load error: {}", description),
            EmbedFailure::HttpError {
                status_code,
                description,
            } => write!(f, "http {}: {}", status_code, description),
        }
    }
}

/// Signal reported by the embedded surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmbedSignal {
    Loaded,
    LoadError { description: String },
    HttpStatus { status_code: u16, description: String },
}

impl EmbedSignal {
    /// The failure this signal represents, if any.
    ///
    /// Every status outside 2xx counts as a failure, 1xx and 3xx included.
    pub fn failure(&self) -> Option<EmbedFailure> {
        match self {
            EmbedSignal::Loaded => None,
            EmbedSignal::LoadError { description } => Some(EmbedFailure::LoadError {
                description: description.clone(),
            }),
            EmbedSignal::HttpStatus { status_code, .. } if (200..300).contains(status_code) => {
                None
            }
            EmbedSignal::HttpStatus {
                status_code,
                description,
            } => Some(EmbedFailure::HttpError {
                status_code: *status_code,
                description: description.clone(),
            }),
        }
    }
}

/// User-initiated actions that end the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    ScanAgain,
    Back,
    GoHome,
}

impl std::fmt::Display for UserAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserAction::ScanAgain => write!(f, "scan_again"),
            UserAction::Back => write!(f, "back"),
            UserAction::GoHome => write!(f, "go_home"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_non_success_status_is_failure() {
        for code in [100u16, 204, 301, 304, 404, 500] {
            let signal = EmbedSignal::HttpStatus {
                status_code: code,
                description: String::new(),
            };
            let expected_failure = !(200..300).contains(&code);
            assert_eq!(signal.failure().is_some(), expected_failure, "status {}", code);
        }
    }

    #[test]
    fn test_load_error_is_failure() {
        let signal = EmbedSignal::LoadError {
            description: "net::ERR_FAILED".to_string(),
        };
        assert_eq!(
            signal.failure().map(|f| f.reason()),
            Some("webview-error".to_string())
        );
        assert!(EmbedSignal::Loaded.failure().is_none());
    }

    #[test]
    fn test_http_failure_reason_and_message() {
        let failure = EmbedFailure::HttpError {
            status_code: 403,
            description: "Forbidden".to_string(),
        };
        assert_eq!(failure.reason(), "http-403");
        assert!(failure.user_message().contains("Status 403"));
    }

    #[test]
    fn test_state_accessors() {
        let session_id = SessionId::new();
        let state = PlaybackState::Embedding {
            session_id,
            url: "https://example.com".to_string(),
        };
        assert_eq!(state.session_id(), Some(session_id));
        assert_eq!(state.url(), Some("https://example.com"));
        assert_eq!(state.name(), "embedding");
        assert!(PlaybackState::default().is_idle());
    }

    #[test]
    fn test_session_ids_are_distinct() {
        assert_ne!(SessionId::new(), SessionId::new());
    }
}
