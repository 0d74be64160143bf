// src/lib.rs
// QR Calendar - scan a code, unlock dated media, play it
//
// Architecture:
// - Domain-centric: records, outcomes and playback states are plain values
// - Pure core: gate, normalizer and resolution take `now` explicitly
// - Event-driven: the controller publishes every transition on the bus
// - Explicit: one PlaybackState, owned by one controller

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_media_record, DomainError, EmbedFailure, EmbedSignal, MediaRecord, PlaybackState,
    ResolutionOutcome, SessionId, UserAction,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::{AppConfig, EmbedSettings};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    CodeResolved, CodeScanned, DomainEvent, EmbedFailed, EmbedRequested,
    EventBus, EventLogEntry, ExternalOpenFailed, ExternalOpenRequested, NoticeKind,
    PlaybackStateChanged, ScanIgnored, SessionReset, StaleSignalDropped, UserNotified,
};

// ============================================================================
// PUBLIC API - Catalog, Services, Integrations
// ============================================================================

pub use repositories::{InMemoryMediaCatalog, MediaCatalog};

pub use services::{
    is_unlocked, normalize, resolve, MediaAvailability, PlaybackController, ResolutionService,
    ScanDisposition, SignalDisposition, UrlNormalizer,
};

pub use integrations::{ExternalUrlOpener, SystemUrlOpener};

pub use application::AppState;
