// events/types.rs
//
// Scan and playback events.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EmbedSettings;
use crate::domain::playback::{EmbedFailure, PlaybackState, SessionId, UserAction};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ident) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($event) }
        }
    };
}

// ============================================================================
// SCAN EVENTS
// ============================================================================

/// Emitted for every code the scanner hands over
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeScanned {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub code: String,
}

impl CodeScanned {
    pub fn new(code: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            code,
        }
    }
}

impl_domain_event!(CodeScanned);

/// Emitted when a scan arrives while a session is still showing its result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanIgnored {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub code: String,
    pub current_state: String,
}

impl ScanIgnored {
    pub fn new(code: String, current_state: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            code,
            current_state,
        }
    }
}

impl_domain_event!(ScanIgnored);

// ============================================================================
// PLAYBACK EVENTS
// ============================================================================

/// Emitted on every controller transition. The presentation layer renders `state`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStateChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub from: String,
    pub state: PlaybackState,
}

impl PlaybackStateChanged {
    pub fn new(from: &PlaybackState, state: PlaybackState) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            from: from.name().to_string(),
            state,
        }
    }
}

impl_domain_event!(PlaybackStateChanged);

/// Instructs the presentation layer to load `url` in an embedded surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedRequested {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: SessionId,
    pub url: String,
    pub settings: EmbedSettings,
}

impl EmbedRequested {
    pub fn new(session_id: SessionId, url: String, settings: EmbedSettings) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
            url,
            settings,
        }
    }
}

impl_domain_event!(EmbedRequested);

/// Emitted when the embedded surface reports a load or HTTP failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: SessionId,
    pub url: String,
    pub failure: EmbedFailure,
}

impl EmbedFailed {
    pub fn new(session_id: SessionId, url: String, failure: EmbedFailure) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
            url,
            failure,
        }
    }
}

impl_domain_event!(EmbedFailed);

/// A signal arrived for a session that is no longer current
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaleSignalDropped {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub signal_session_id: SessionId,
    pub current_session_id: Option<SessionId>,
}

impl StaleSignalDropped {
    pub fn new(signal_session_id: SessionId, current_session_id: Option<SessionId>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            signal_session_id,
            current_session_id,
        }
    }
}

impl_domain_event!(StaleSignalDropped);

/// One per fallback: the url was handed to the platform opener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalOpenRequested {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub url: String,
    pub reason: String, // "webview-error", "http-404", ...
}

impl ExternalOpenRequested {
    pub fn new(url: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            url,
            reason,
        }
    }
}

impl_domain_event!(ExternalOpenRequested);

/// The platform opener refused the url
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalOpenFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub url: String,
    pub error: String,
}

impl ExternalOpenFailed {
    pub fn new(url: String, error: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            url,
            error,
        }
    }
}

impl_domain_event!(ExternalOpenFailed);

/// The user ended the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReset {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub action: UserAction,
    pub discarded_session_id: Option<SessionId>,
}

impl SessionReset {
    pub fn new(action: UserAction, discarded_session_id: Option<SessionId>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            action,
            discarded_session_id,
        }
    }
}

impl_domain_event!(SessionReset);

// ============================================================================
// USER NOTICES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Inline status text on the result screen
    Status,
    /// Modal alert
    Alert,
}

/// Human-readable text for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserNotified {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: NoticeKind,
    pub message: String,
}

impl UserNotified {
    pub fn status(message: String) -> Self {
        Self::new(NoticeKind::Status, message)
    }

    pub fn alert(message: String) -> Self {
        Self::new(NoticeKind::Alert, message)
    }

    fn new(kind: NoticeKind, message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            message,
        }
    }
}

impl_domain_event!(UserNotified);
