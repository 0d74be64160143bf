// src/services/playback_controller.rs
//
// Playback Controller - one scan session's lifecycle
//
// Idle → Resolved → { Embedding → Playing | EmbedFailed } → FallbackRequested → Idle
//
// CRITICAL RULES:
// - Owns the only PlaybackState; the UI learns about it through events
// - Signals are processed one at a time by the host event loop (&mut self)
// - Every embed carries a SessionId; signals for any other id are dropped
// - A single embed failure always falls back to the external opener, no retry
// - External open failures are reported, never propagated; the session still ends

use std::sync::Arc;

use chrono::NaiveDateTime;
use log::{debug, info, warn};

use crate::config::EmbedSettings;
use crate::domain::playback::{EmbedFailure, EmbedSignal, PlaybackState, SessionId, UserAction};
use crate::domain::resolution::ResolutionOutcome;
use crate::events::{
    CodeScanned, EmbedFailed, EmbedRequested, EventBus, ExternalOpenFailed,
    ExternalOpenRequested, PlaybackStateChanged, ScanIgnored, SessionReset, StaleSignalDropped,
    UserNotified,
};
use crate::integrations::ExternalUrlOpener;
use crate::services::resolution_service::ResolutionService;

/// What the controller did with a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanDisposition {
    /// A new session started with this outcome
    Started {
        outcome: ResolutionOutcome,
        session_id: Option<SessionId>,
    },
    /// A session is still active; the scan was dropped
    Ignored,
}

/// What the controller did with an embed signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalDisposition {
    /// Embedding → Playing
    Playing,
    /// Valid for the session but changes nothing (2xx status, repeated load)
    Unchanged,
    /// The embed failed and the url went to the external opener
    FellBack { opened: bool },
    /// The signal belongs to a session that is no longer current
    Stale,
}

pub struct PlaybackController {
    state: PlaybackState,
    event_bus: Arc<EventBus>,
    opener: Arc<dyn ExternalUrlOpener>,
    embed_settings: EmbedSettings,
}

impl PlaybackController {
    pub fn new(
        event_bus: Arc<EventBus>,
        opener: Arc<dyn ExternalUrlOpener>,
        embed_settings: EmbedSettings,
    ) -> Self {
        Self {
            state: PlaybackState::Idle,
            event_bus,
            opener,
            embed_settings,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Session of the live embed, if any
    pub fn current_session(&self) -> Option<SessionId> {
        self.state.session_id()
    }

    // ========================================================================
    // SCAN INPUT
    // ========================================================================

    /// Handle one scanner event.
    ///
    /// While a session is active the camera is not listening, so scans are
    /// dropped until the user chooses "scan again" or "back".
    pub fn handle_scan(
        &mut self,
        code: &str,
        resolver: &ResolutionService,
        now: NaiveDateTime,
    ) -> ScanDisposition {
        if !self.state.is_idle() {
            debug!("Ignoring scan {:?} while {}", code, self.state);
            self.event_bus
                .emit(ScanIgnored::new(code.to_string(), self.state.name().to_string()));
            return ScanDisposition::Ignored;
        }

        info!("QR scanned: {:?}", code);
        self.event_bus.emit(CodeScanned::new(code.to_string()));

        let outcome = resolver.resolve(code, now);
        let session_id = self.begin(outcome.clone());
        ScanDisposition::Started {
            outcome,
            session_id,
        }
    }

    /// Start a session from a resolution outcome.
    ///
    /// Returns the embed session id when the outcome is unlocked. Any
    /// session still active is discarded first.
    pub fn begin(&mut self, outcome: ResolutionOutcome) -> Option<SessionId> {
        if !self.state.is_idle() {
            debug!("Discarding {} session before starting a new one", self.state);
            self.transition(PlaybackState::Idle);
        }

        self.transition(PlaybackState::Resolved {
            outcome: outcome.clone(),
        });
        self.notify_status(outcome.status_message());

        let ResolutionOutcome::Unlocked { normalized_url } = outcome else {
            return None;
        };

        let session_id = SessionId::new();
        self.transition(PlaybackState::Embedding {
            session_id,
            url: normalized_url.clone(),
        });
        self.event_bus.emit(EmbedRequested::new(
            session_id,
            normalized_url,
            self.embed_settings.clone(),
        ));
        Some(session_id)
    }

    // ========================================================================
    // EMBED SIGNALS
    // ========================================================================

    /// Apply a signal from the embedded surface
    pub fn on_embed_signal(
        &mut self,
        session_id: SessionId,
        signal: EmbedSignal,
    ) -> SignalDisposition {
        let current = self.current_session();
        if current != Some(session_id) {
            warn!(
                "Dropping stale embed signal for session {} (current: {:?})",
                session_id, current
            );
            self.event_bus
                .emit(StaleSignalDropped::new(session_id, current));
            return SignalDisposition::Stale;
        }

        let url = match self.state.url() {
            Some(url) => url.to_string(),
            None => return SignalDisposition::Unchanged,
        };

        if let Some(failure) = signal.failure() {
            let opened = self.fail_and_fall_back(session_id, url, failure);
            return SignalDisposition::FellBack { opened };
        }

        let embedding = matches!(self.state, PlaybackState::Embedding { .. });
        if embedding && signal == EmbedSignal::Loaded {
            info!("Embedded player loaded {}", url);
            self.transition(PlaybackState::Playing { session_id, url });
            return SignalDisposition::Playing;
        }
        SignalDisposition::Unchanged
    }

    fn fail_and_fall_back(
        &mut self,
        session_id: SessionId,
        url: String,
        failure: EmbedFailure,
    ) -> bool {
        warn!("Embedded playback failed for {}: {}", url, failure);
        self.transition(PlaybackState::EmbedFailed {
            session_id,
            url: url.clone(),
            failure: failure.clone(),
        });
        self.event_bus
            .emit(EmbedFailed::new(session_id, url.clone(), failure.clone()));
        self.notify_alert(failure.user_message());

        self.transition(PlaybackState::FallbackRequested {
            url: url.clone(),
            failure: failure.clone(),
        });
        let opened = self.open_externally(&url, &failure.reason());
        self.transition(PlaybackState::Idle);
        opened
    }

    fn open_externally(&self, url: &str, reason: &str) -> bool {
        if url.trim().is_empty() {
            self.notify_alert("No URL to open".to_string());
            return false;
        }

        warn!("Opening {} externally due to: {}", url, reason);
        self.event_bus
            .emit(ExternalOpenRequested::new(url.to_string(), reason.to_string()));

        match self.opener.open(url) {
            Ok(()) => true,
            Err(e) => {
                warn!("External open of {} failed: {}", url, e);
                self.event_bus
                    .emit(ExternalOpenFailed::new(url.to_string(), e.to_string()));
                self.notify_alert(format!("Unable to open link externally: {}", e));
                false
            }
        }
    }

    // ========================================================================
    // USER ACTIONS
    // ========================================================================

    /// "Scan again", "back" or "home": end the session immediately.
    /// Later signals from the discarded embed are treated as stale.
    pub fn reset(&mut self, action: UserAction) {
        let discarded = self.current_session();
        info!("Session reset by {} (discarded: {:?})", action, discarded);
        self.event_bus.emit(SessionReset::new(action, discarded));
        if !self.state.is_idle() {
            self.transition(PlaybackState::Idle);
        }
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    fn transition(&mut self, next: PlaybackState) {
        let previous = std::mem::replace(&mut self.state, next.clone());
        debug!("Playback state {} → {}", previous, next);
        self.event_bus
            .emit(PlaybackStateChanged::new(&previous, next));
    }

    fn notify_status(&self, message: String) {
        self.event_bus.emit(UserNotified::status(message));
    }

    fn notify_alert(&self, message: String) {
        self.event_bus.emit(UserNotified::alert(message));
    }
}
